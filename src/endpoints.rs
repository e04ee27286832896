//! The API endpoints URIs.

/// The root route which redirects to the expenses or log in page.
pub const ROOT: &str = "/";
/// The page for listing, adding and filtering the user's expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The route for getting the registration page.
pub const REGISTER_VIEW: &str = "/register";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to register a new user.
pub const USERS: &str = "/api/users";
/// The route to create an expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to change the filter applied to the expense list.
pub const EXPENSE_FILTER: &str = "/api/expenses/filter";
/// The route to remove the filter applied to the expense list.
pub const CLEAR_EXPENSE_FILTER: &str = "/api/expenses/filter/clear";
