//! End-to-end form flows driven through the event registry

use survey_form::controller::{
    ControllerOptions, EventKind, HintTooltips, SubmitOutcome, SurveyController,
};
use survey_form::document::{
    Document, Marker, Tone, SUMMARY_BALANCE_ID, SUMMARY_CARD_ID, SUMMARY_EXPENSES_ID,
    SUMMARY_INCOME_ID, SUMMARY_RATIO_ID,
};
use survey_form::models::ExpenseCategory;
use survey_form::services::{FieldValidity, ValidationIssue};
use survey_form::submission::SurveyResponse;

fn controller() -> SurveyController {
    SurveyController::new(Document::survey(), ControllerOptions::default())
}

fn value(form: &SurveyController, id: &str) -> String {
    form.document().find(id).unwrap().value.clone()
}

fn validity(form: &SurveyController, id: &str) -> FieldValidity {
    FieldValidity::of(form.document().find(id).unwrap())
}

#[test]
fn toggling_every_category_clears_and_disables() {
    let mut form = controller();
    for category in ExpenseCategory::ALL {
        form.set_checked(category, true);
        let amount = form.document().find(&category.amount_id()).unwrap();
        assert!(!amount.disabled);
        assert!(amount.container_has_marker(Marker::ExpenseEnabled));

        form.set_value(&category.amount_id(), "99");
        form.set_checked(category, false);

        let amount = form.document().find(&category.amount_id()).unwrap();
        assert!(amount.disabled);
        assert_eq!(amount.value, "");
        assert!(!amount.container_has_marker(Marker::ExpenseEnabled));
    }
}

#[test]
fn summary_for_income_and_one_expense() {
    let mut form = controller();
    form.set_value("total_income", "1000");
    form.set_checked(ExpenseCategory::Utilities, true);
    form.set_value("utilities_amount", "200");

    let summary = form.recompute_summary().unwrap();
    assert_eq!(summary.total_expenses, 200.0);
    assert_eq!(summary.balance, 800.0);
    assert_eq!(summary.ratio, 20.0);

    assert_eq!(value(&form, SUMMARY_INCOME_ID), "$1,000.00");
    assert_eq!(value(&form, SUMMARY_EXPENSES_ID), "$200.00");
    assert_eq!(value(&form, SUMMARY_BALANCE_ID), "$800.00");
    assert_eq!(value(&form, SUMMARY_RATIO_ID), "20.0%");

    let ratio = form.document().find(SUMMARY_RATIO_ID).unwrap();
    assert_eq!(ratio.styling.unwrap().tone, Tone::Success);
}

#[test]
fn overspending_is_styled_as_danger() {
    let mut form = controller();
    form.set_value("total_income", "500");
    form.set_checked(ExpenseCategory::Healthcare, true);
    form.set_value("healthcare_amount", "600");

    assert_eq!(value(&form, SUMMARY_BALANCE_ID), "-$100.00");
    assert_eq!(value(&form, SUMMARY_RATIO_ID), "120.0%");

    let balance = form.document().find(SUMMARY_BALANCE_ID).unwrap();
    assert_eq!(balance.styling.unwrap().tone, Tone::Danger);
    let ratio = form.document().find(SUMMARY_RATIO_ID).unwrap();
    assert_eq!(ratio.styling.unwrap().tone, Tone::Danger);
    assert!(ratio.styling.unwrap().bold);
}

#[test]
fn unchecked_category_stops_contributing() {
    let mut form = controller();
    form.set_value("total_income", "1000");
    form.set_checked(ExpenseCategory::Shopping, true);
    form.set_value("shopping_amount", "300");
    form.set_checked(ExpenseCategory::Shopping, false);

    let summary = form.recompute_summary().unwrap();
    assert_eq!(summary.total_expenses, 0.0);
    assert_eq!(summary.ratio, 0.0);
}

#[test]
fn summary_hides_when_everything_is_zero() {
    let mut form = controller();
    form.set_value("total_income", "100");
    assert!(!form.document().find(SUMMARY_CARD_ID).unwrap().hidden);

    form.set_value("total_income", "");
    assert!(form.document().find(SUMMARY_CARD_ID).unwrap().hidden);
}

#[test]
fn age_bounds_on_blur() {
    let mut form = controller();
    for (age, expected) in [
        ("17", FieldValidity::Invalid),
        ("18", FieldValidity::Valid),
        ("120", FieldValidity::Valid),
        ("121", FieldValidity::Invalid),
    ] {
        form.set_value("age", age);
        form.blur("age");
        assert_eq!(validity(&form, "age"), expected, "age {}", age);
    }
}

#[test]
fn no_expense_checked_blocks_submission() {
    let mut form = controller();
    form.set_value("age", "40");
    form.select("gender", "female");
    form.set_value("total_income", "3200");

    let SubmitOutcome::Blocked(report) = form.submit() else {
        panic!("submission should be blocked");
    };
    assert_eq!(report.issues, vec![ValidationIssue::NoExpenseSelected]);
    assert_eq!(validity(&form, "age"), FieldValidity::Valid);
    assert_eq!(validity(&form, "gender"), FieldValidity::Valid);
    assert_eq!(validity(&form, "total_income"), FieldValidity::Valid);
}

#[test]
fn unset_gender_gets_scroll_and_focus() {
    let mut form = controller();
    form.set_value("age", "40");
    form.set_value("total_income", "3200");
    form.set_checked(ExpenseCategory::Entertainment, true);
    form.set_value("entertainment_amount", "150");

    assert!(!form.submit().is_submitted());
    let gender = form.document().lookup("gender").unwrap();
    assert_eq!(validity(&form, "gender"), FieldValidity::Invalid);
    assert_eq!(form.document().scrolled_to(), Some(gender));
    assert_eq!(form.document().focused(), Some(gender));
}

#[test]
fn first_invalid_field_in_document_order_wins() {
    let mut form = controller();
    form.set_value("age", "5");
    form.set_value("total_income", "-1");

    assert!(!form.submit().is_submitted());
    let age = form.document().lookup("age").unwrap();
    assert_eq!(form.document().focused(), Some(age));
}

#[test]
fn valid_submission_produces_response() {
    let mut form = controller();
    form.set_value("age", "29");
    form.select("gender", "prefer_not_to_say");
    form.set_value("total_income", "4000");
    form.set_checked(ExpenseCategory::SchoolFees, true);
    form.set_value("school_fees_amount", "750.25");
    form.set_checked(ExpenseCategory::Healthcare, true);
    form.set_value("healthcare_amount", "120");

    let SubmitOutcome::Submitted(data) = form.submit() else {
        panic!("submission should go through");
    };
    assert_eq!(data.get("school_fees_check"), Some("y"));
    assert!(!data.contains("utilities_amount"));

    let response = SurveyResponse::from_form_data(&data).unwrap();
    assert_eq!(response.age, 29);
    assert_eq!(response.expense(ExpenseCategory::SchoolFees), 750.25);
    assert_eq!(response.total_expenses(), 870.25);
}

#[test]
fn dispatch_runs_handlers_without_helpers() {
    let mut form = controller();
    let income = form.document().lookup("total_income").unwrap();

    assert!(form.registry().has_listeners(income, EventKind::Input));
    assert!(form.dispatch(income, EventKind::Input).is_none());
    assert!(form.document().find(SUMMARY_CARD_ID).unwrap().hidden);
}

#[test]
fn public_api_formats_currency() {
    let form = controller();
    assert_eq!(form.format_currency(1234.5), "$1,234.50");
}

#[test]
fn missing_elements_degrade_gracefully() {
    let document = Document::survey()
        .without("utilities_check")
        .without(SUMMARY_RATIO_ID);
    let mut form = SurveyController::new(document, ControllerOptions::default());

    assert!(form.schema().expense(ExpenseCategory::Utilities).is_none());
    form.set_checked(ExpenseCategory::Utilities, true);
    form.set_value("total_income", "800");
    assert_eq!(value(&form, SUMMARY_BALANCE_ID), "$800.00");
}

#[test]
fn tooltips_come_from_injected_provider() {
    let options = ControllerOptions::default().with_tooltips(HintTooltips::new());
    let form = SurveyController::new(Document::survey(), options);
    let income = form.document().lookup("total_income").unwrap();
    assert_eq!(
        form.tooltip(income),
        Some("Your combined monthly income before expenses")
    );
}

#[test]
fn blocked_submit_never_focuses_a_disabled_amount() {
    let mut form = controller();
    form.set_value("age", "40");
    form.select("gender", "male");
    form.set_value("total_income", "3200");
    form.set_checked(ExpenseCategory::Utilities, true);
    form.set_value("utilities_amount", "0");
    form.blur("utilities_amount");
    assert_eq!(validity(&form, "utilities_amount"), FieldValidity::Invalid);

    form.set_checked(ExpenseCategory::Utilities, false);
    form.set_checked(ExpenseCategory::Shopping, true);
    form.set_value("shopping_amount", "0");

    assert!(!form.submit().is_submitted());
    let shopping = form.document().lookup("shopping_amount").unwrap();
    let focused = form.document().focused().unwrap();
    assert!(!form.document().get(focused).disabled);
    assert_eq!(focused, shopping);
    assert_eq!(form.document().scrolled_to(), Some(shopping));
}

#[test]
fn non_finite_income_blocks_submission() {
    for income in ["Infinity", "1e400"] {
        let mut form = controller();
        form.set_value("age", "40");
        form.select("gender", "female");
        form.set_value("total_income", income);
        form.set_checked(ExpenseCategory::Utilities, true);
        form.set_value("utilities_amount", "10");

        let SubmitOutcome::Blocked(report) = form.submit() else {
            panic!("income {} should block submission", income);
        };
        assert_eq!(report.issues, vec![ValidationIssue::IncomeNotPositive]);
        assert_eq!(validity(&form, "total_income"), FieldValidity::Invalid);
        let income_ref = form.document().lookup("total_income").unwrap();
        assert_eq!(form.document().focused(), Some(income_ref));
    }
}
