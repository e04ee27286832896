//! The app bar shown at the top of the pages for logged-in users.

use maud::{Markup, html};

use crate::endpoints;

/// The app bar with the app title and an account menu holding the log-out link.
///
/// The menu is a `details` element so it opens and closes without any script.
pub fn app_bar() -> Markup {
    html!(
        header class="bg-blue-700 text-white shadow dark:bg-gray-900"
        {
            div class="max-w-screen-xl mx-auto flex items-center justify-between px-4 py-3"
            {
                a href=(endpoints::ROOT) class="text-xl font-semibold whitespace-nowrap"
                {
                    "Expense Tracker"
                }

                details id="account-menu" class="relative"
                {
                    summary
                        class="list-none cursor-pointer rounded-full px-3 py-1
                        hover:bg-blue-600 dark:hover:bg-gray-700"
                        aria-label="Account of current user"
                    {
                        "Account"
                    }

                    div
                        class="absolute right-0 mt-2 w-32 rounded-lg border border-gray-200
                        bg-white py-1 text-gray-900 shadow-lg dark:border-gray-700
                        dark:bg-gray-800 dark:text-white"
                    {
                        a
                            href=(endpoints::LOG_OUT)
                            class="block px-4 py-2 hover:bg-gray-100 dark:hover:bg-gray-700"
                        {
                            "Log out"
                        }
                    }
                }
            }
        }
    )
}
