//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped out-of-band into the `#alert-container` element that
//! [crate::html::base] places on every page.

use maud::{Markup, html};

/// An alert message to show in the corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something the user asked for succeeded.
    Success {
        /// The headline of the alert.
        message: String,
        /// Extra details shown below the headline.
        details: String,
    },
    /// Something went wrong.
    Error {
        /// The headline of the alert.
        message: String,
        /// Extra details shown below the headline.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an out-of-band swap for the alert container.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(container_style) role="alert"
                {
                    div class="flex justify-between items-start"
                    {
                        span class="font-medium" { (message) }

                        button
                            type="button"
                            aria-label="Close"
                            onclick="this.closest('#alert-container').classList.add('hidden')"
                        {
                            "✕"
                        }
                    }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }
            }
        }
    }
}
