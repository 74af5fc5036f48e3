use super::common::*;
use crate::workflows::quote::domain::{
    CompanyCarModel, EquipmentPurchase, MobilitySelection, WorkModel,
};
use crate::workflows::quote::intake::{CompensationForm, FormField, ProfileForm};

#[test]
fn profile_reports_every_missing_field_together() {
    let rejection = validator()
        .validate_profile(&ProfileForm::default())
        .expect_err("empty form rejected");

    let fields: Vec<FormField> = rejection.issues.iter().map(|issue| issue.field).collect();
    assert_eq!(
        fields,
        vec![
            FormField::Experience,
            FormField::WorkModel,
            FormField::Position,
            FormField::Nationality,
        ]
    );
}

#[test]
fn hybrid_profile_requires_onsite_days() {
    let mut form = profile_form();
    form.work_model = "Hybrid".to_string();

    let rejection = validator()
        .validate_profile(&form)
        .expect_err("missing hybrid days rejected");
    assert!(rejection
        .issues
        .iter()
        .any(|issue| issue.field == FormField::HybridOnsiteDays));

    form.hybrid_onsite_days = "3".to_string();
    let profile = validator().validate_profile(&form).expect("valid profile");
    assert_eq!(profile.work_model, WorkModel::Hybrid);
    assert_eq!(profile.hybrid_onsite_days, 3);
}

#[test]
fn non_hybrid_profile_zeroes_onsite_days() {
    let mut form = profile_form();
    form.hybrid_onsite_days = "4".to_string();

    let profile = validator().validate_profile(&form).expect("valid profile");
    assert_eq!(profile.hybrid_onsite_days, 0);
}

#[test]
fn salary_parses_eu_and_us_styles() {
    let review = validator()
        .validate_compensation(&profile(), &compensation_form("2.500,50"))
        .expect("eu style parses");
    assert_euro(review.input.monthly_gross, 2500.5);

    let review = validator()
        .validate_compensation(&profile(), &compensation_form("3,000.25"))
        .expect("us style parses");
    assert_euro(review.input.monthly_gross, 3000.25);
}

#[test]
fn missing_salary_is_rejected() {
    let rejection = validator()
        .validate_compensation(&profile(), &compensation_form(""))
        .expect_err("empty salary rejected");
    assert_eq!(rejection.issues.len(), 1);
    assert_eq!(rejection.issues[0].field, FormField::MonthlySalary);
}

#[test]
fn below_minimum_salary_is_guidance_not_failure() {
    // Scenario F: Other nationality at €3,000 is under the €3,703.44 minimum.
    let mut other = profile();
    other.nationality = crate::workflows::quote::domain::Nationality::Other;

    let review = validator()
        .validate_compensation(&other, &compensation_form("3000"))
        .expect("phase still passes");
    assert_eq!(review.guidance.len(), 1);
    assert_eq!(review.guidance[0].field, FormField::MonthlySalary);
    assert!(review.guidance[0].message.contains("3703.44"));
}

#[test]
fn salary_at_or_above_minimum_has_no_guidance() {
    let review = validator()
        .validate_compensation(&profile(), &compensation_form("3000"))
        .expect("valid salary");
    assert!(review.guidance.is_empty());
}

#[test]
fn net_override_kept_only_when_positive() {
    let mut form = compensation_form("3000");
    form.monthly_net_salary = "2.300,00".to_string();
    let review = validator()
        .validate_compensation(&profile(), &form)
        .expect("valid");
    assert_eq!(review.input.monthly_net_override, Some(2300.0));

    form.monthly_net_salary = "0".to_string();
    let review = validator()
        .validate_compensation(&profile(), &form)
        .expect("valid");
    assert_eq!(review.input.monthly_net_override, None);

    form.monthly_net_salary = String::new();
    let review = validator()
        .validate_compensation(&profile(), &form)
        .expect("valid");
    assert_eq!(review.input.monthly_net_override, None);
}

#[test]
fn company_car_wins_over_other_mobility_toggles() {
    // All three raw toggles set at once: car takes precedence and the other
    // two never reach the normalized record.
    let form = CompensationForm {
        monthly_salary: "3000".to_string(),
        company_car: true,
        car_model: "volkswagen_taigo".to_string(),
        mobility_budget: true,
        mobility_category: "category_2".to_string(),
        bicycle_allowance: true,
        bicycle_km: "60".to_string(),
        ..CompensationForm::default()
    };

    let review = validator()
        .validate_compensation(&profile(), &form)
        .expect("valid");
    assert_eq!(
        review.input.mobility,
        MobilitySelection::CompanyCar {
            model: CompanyCarModel::VolkswagenTaigo
        }
    );
}

#[test]
fn company_car_requires_a_model() {
    let form = CompensationForm {
        monthly_salary: "3000".to_string(),
        company_car: true,
        ..CompensationForm::default()
    };

    let rejection = validator()
        .validate_compensation(&profile(), &form)
        .expect_err("missing model rejected");
    assert_eq!(rejection.issues[0].field, FormField::CarModel);
}

#[test]
fn bicycle_mobility_parses_kilometers() {
    let form = CompensationForm {
        monthly_salary: "3000".to_string(),
        bicycle_allowance: true,
        bicycle_km: "60".to_string(),
        ..CompensationForm::default()
    };

    let review = validator()
        .validate_compensation(&profile(), &form)
        .expect("valid");
    assert_eq!(
        review.input.mobility,
        MobilitySelection::BicycleAllowance { km_per_month: 60.0 }
    );
}

#[test]
fn benefit_amounts_collect_issues_per_field() {
    let mut form = benefits_form();
    form.pension_plan = true;
    form.pension_percent = "7".to_string();
    form.phone_allowance = true;
    form.phone_allowance_amount = "45".to_string();

    let rejection = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect_err("both out-of-range fields rejected");

    let fields: Vec<FormField> = rejection.issues.iter().map(|issue| issue.field).collect();
    assert_eq!(
        fields,
        vec![FormField::PensionPercent, FormField::PhoneAllowanceAmount]
    );
}

#[test]
fn representation_requires_amount_when_active() {
    let mut form = benefits_form();
    form.representation = true;

    let rejection = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect_err("missing amount rejected");
    assert_eq!(rejection.issues[0].field, FormField::RepresentationAmount);

    form.representation_amount = "150".to_string();
    let benefits = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect("valid");
    assert_eq!(benefits.representation_monthly, Some(150.0));
}

#[test]
fn remote_work_model_switches_off_gated_benefits() {
    let mut remote = profile();
    remote.work_model = WorkModel::Remote;

    let mut form = benefits_form();
    form.home_office_allowance = true;
    form.office_equipment = true;
    form.equipment_type = "monthly".to_string();
    form.home_internet = true;
    form.home_internet_amount = "15".to_string();
    form.printer_scanner = true;
    form.representation = true;
    form.representation_amount = "100".to_string();

    let benefits = validator()
        .validate_benefits(&remote, &compensation(3000.0), &form)
        .expect("stale gated toggles are normalized off, not errored");
    assert!(!benefits.home_office_allowance);
    assert_eq!(benefits.office_equipment, None);
    assert_eq!(benefits.home_internet_monthly, None);
    assert!(!benefits.printer_scanner);
    assert_eq!(benefits.representation_monthly, None);
}

#[test]
fn office_equipment_requires_home_office_and_a_choice() {
    let mut form = benefits_form();
    form.office_equipment = true;
    form.equipment_type = "one_time".to_string();

    // Home office off: the gate normalizes equipment away.
    let benefits = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect("valid");
    assert_eq!(benefits.office_equipment, None);

    form.home_office_allowance = true;
    let benefits = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect("valid");
    assert_eq!(benefits.office_equipment, Some(EquipmentPurchase::OneTime));

    form.equipment_type = String::new();
    let rejection = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect_err("missing equipment choice rejected");
    assert_eq!(rejection.issues[0].field, FormField::EquipmentType);
}

#[test]
fn car_wash_needs_a_company_car() {
    let mut form = benefits_form();
    form.car_wash = true;
    form.car_wash_amount = "8".to_string();

    let benefits = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &form)
        .expect("valid");
    assert_eq!(benefits.car_wash_monthly, None);

    let mut with_car = compensation(3000.0);
    with_car.mobility = MobilitySelection::CompanyCar {
        model: CompanyCarModel::NissanJuke,
    };
    let benefits = validator()
        .validate_benefits(&profile(), &with_car, &form)
        .expect("valid");
    assert_eq!(benefits.car_wash_monthly, Some(8.0));
}

#[test]
fn statutory_benefits_are_always_on_after_intake() {
    let benefits = validator()
        .validate_benefits(&profile(), &compensation(3000.0), &benefits_form())
        .expect("valid");
    assert!(benefits.hospitalization);
    assert!(benefits.accident_insurance);
}

#[test]
fn margin_accepts_zero_and_negative_manual_amounts() {
    use crate::workflows::quote::domain::TargetMargin;

    let margin = validator()
        .validate_margin(&margin_form("manual", "-5000"))
        .expect("negative manual margin accepted");
    assert_eq!(
        margin,
        TargetMargin::Manual {
            annual_amount: -5000.0
        }
    );

    let margin = validator()
        .validate_margin(&margin_form("manual", "0"))
        .expect("zero accepted");
    assert_eq!(margin.annual_amount(), 0.0);
}

#[test]
fn margin_requires_a_selection_and_a_parsable_manual_amount() {
    let rejection = validator()
        .validate_margin(&margin_form("", ""))
        .expect_err("no selection rejected");
    assert_eq!(rejection.issues[0].field, FormField::MarginSelection);

    let rejection = validator()
        .validate_margin(&margin_form("manual", "abc"))
        .expect_err("unparsable manual amount rejected");
    assert_eq!(rejection.issues[0].field, FormField::ManualMarginAmount);
}
