//! Templates for the expense page.
//!
//! The page has three parts that HTMX swaps independently:
//! - `#expenses-content`, the whole section, replaced after adding an expense or clearing
//!   the filter;
//! - `#expense-list`, the table and total, replaced while the filter inputs change;
//! - `#alert-container`, swapped out-of-band for success messages.

use maud::{Markup, html};

use crate::{
    endpoints,
    expense::{ExpenseForm, ExpenseListState, ExpenseRecord, FilterCriteria},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        dollar_input_styles, loading_spinner,
    },
    navigation::app_bar,
};

pub(super) const EXPENSES_CONTENT_ID: &str = "expenses-content";
pub(super) const EXPENSE_LIST_ID: &str = "expense-list";

/// The full expense page.
pub(super) fn expenses_page(list: &ExpenseListState) -> Markup {
    let content = html! {
        (app_bar())

        div class=(PAGE_CONTAINER_STYLE)
        {
            (expenses_section(list, &ExpenseForm::default(), false))
        }
    };

    base("Expenses", &[dollar_input_styles()], &content)
}

/// Everything below the app bar.
///
/// `draft` holds the values to show in the add form. The filter panel starts open when
/// `show_filters` is set or a filter is active.
pub(super) fn expenses_section(
    list: &ExpenseListState,
    draft: &ExpenseForm,
    show_filters: bool,
) -> Markup {
    html! {
        section id=(EXPENSES_CONTENT_ID) class="w-full max-w-2xl space-y-6"
        {
            @if let Some(error) = list.error()
            {
                p id="expense-error" class="text-red-500 text-base" role="alert" { (error) }
            }

            (add_expense_form(draft))

            (filter_panel(list.criteria(), show_filters || list.criteria().is_active()))

            (expense_list(list))
        }
    }
}

fn add_expense_form(draft: &ExpenseForm) -> Markup {
    html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-target={ "#" (EXPENSES_CONTENT_ID) }
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class="w-full space-y-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper"
                {
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        step="0.01"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE)
                        required
                        value=(draft.amount);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                input
                    type="text"
                    name="category"
                    id="category"
                    placeholder="Groceries"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=(draft.category);
            }

            button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Add Expense"
            }
        }
    }
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map(|value| value.to_string()).unwrap_or_default()
}

fn filter_panel(criteria: &FilterCriteria, is_open: bool) -> Markup {
    html! {
        details id="expense-filters" class="w-full" open[is_open]
        {
            summary class=(BUTTON_SECONDARY_STYLE) { "Filters" }

            form
                hx-post=(endpoints::EXPENSE_FILTER)
                hx-trigger="input delay:300ms, submit"
                hx-target={ "#" (EXPENSE_LIST_ID) }
                hx-swap="outerHTML"
                class="space-y-4"
            {
                div
                {
                    label for="filter-category" class=(FORM_LABEL_STYLE) { "Filter by Category" }

                    input
                        type="text"
                        name="category"
                        id="filter-category"
                        class=(FORM_TEXT_INPUT_STYLE)
                        value=(criteria.category_substring.as_deref().unwrap_or_default());
                }

                div class="grid grid-cols-2 gap-4"
                {
                    div
                    {
                        label for="min-amount" class=(FORM_LABEL_STYLE) { "Min Amount" }

                        input
                            type="number"
                            name="min_amount"
                            id="min-amount"
                            step="0.01"
                            class=(FORM_TEXT_INPUT_STYLE)
                            value=(format_bound(criteria.min_amount));
                    }

                    div
                    {
                        label for="max-amount" class=(FORM_LABEL_STYLE) { "Max Amount" }

                        input
                            type="number"
                            name="max_amount"
                            id="max-amount"
                            step="0.01"
                            class=(FORM_TEXT_INPUT_STYLE)
                            value=(format_bound(criteria.max_amount));
                    }
                }

                button
                    type="button"
                    hx-post=(endpoints::CLEAR_EXPENSE_FILTER)
                    hx-target={ "#" (EXPENSES_CONTENT_ID) }
                    hx-swap="outerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Clear Filters"
                }
            }
        }
    }
}

fn expense_row(expense: &ExpenseRecord) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id.as_str())
        {
            td class=(TABLE_CELL_STYLE) { "$" (expense.amount) }
            td class=(TABLE_CELL_STYLE) { (expense.category) }
        }
    }
}

/// The filtered expense table and the total of every expense.
pub(super) fn expense_list(list: &ExpenseListState) -> Markup {
    html! {
        div id=(EXPENSE_LIST_ID) class="w-full space-y-4"
        {
            div class="relative overflow-x-auto shadow-md rounded"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        }
                    }

                    tbody
                    {
                        @for expense in list.filtered_view() {
                            (expense_row(expense))
                        }

                        @if list.filtered_view().is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="2" class={ (TABLE_CELL_STYLE) " text-center" }
                                {
                                    "No expenses found."
                                }
                            }
                        }
                    }
                }
            }

            p id="expense-total" class="text-xl font-semibold"
            {
                "Total Expenses: $" (list.formatted_total())
            }
        }
    }
}
