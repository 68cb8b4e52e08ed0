//! The time-of-day greeting shown at the top of the dashboard.

use maud::{Markup, html};

/// Picks the greeting for the given local hour (0-23).
pub(super) fn greeting_for_hour(hour: u8) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Renders the greeting header.
pub(super) fn greeting_view(user_name: &str, hour: u8) -> Markup {
    html! {
        div class="mb-4 w-full"
        {
            h1 class="text-2xl font-bold"
            {
                (greeting_for_hour(hour)) ", " (user_name) " 👋"
            }

            p class="text-sm text-gray-500 dark:text-gray-400"
            {
                "Here’s your PesaPulse snapshot for this session."
            }
        }
    }
}

#[cfg(test)]
mod greeting_tests {
    use super::{greeting_for_hour, greeting_view};

    #[test]
    fn morning_before_midday() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
    }

    #[test]
    fn afternoon_from_midday_until_six() {
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
    }

    #[test]
    fn evening_from_six() {
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn greets_the_user_by_name() {
        let html = greeting_view("Brian", 9).into_string();

        assert!(html.contains("Good Morning, Brian"));
    }
}
