use chrono::NaiveDate;
use staffdesk_core::{
    BankAccount, CalendarDuration, EducationEntry, EmployeeJob, EmployeeProfile, EmployeeStatus,
    EmployeeValidationError, Gender, JobType, MaritalStatus, PreviousJob, Promotion, ResultType,
};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn profile_new_sets_defaults() {
    let profile = EmployeeProfile::new("Amina Rahman", date(1990, 4, 12));

    assert!(!profile.employee_id.is_nil());
    assert_eq!(profile.name, "Amina Rahman");
    assert!(profile.phone.is_empty());
    assert!(profile.work_email.is_empty());
    assert_eq!(profile.gender, None);
    assert_eq!(profile.marital_status, None);
    assert_eq!(profile.status, EmployeeStatus::Active);
}

#[test]
fn profile_serialization_uses_expected_wire_fields() {
    let employee_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut profile = EmployeeProfile::with_id(employee_id, "Amina Rahman", date(1990, 4, 12));
    profile.gender = Some(Gender::Female);
    profile.marital_status = Some(MaritalStatus::Married);
    profile.blood_group = Some("O+".to_string());
    profile.work_email = "amina@staffdesk.example".to_string();

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["employee_id"], employee_id.to_string());
    assert_eq!(json["name"], "Amina Rahman");
    assert_eq!(json["dob"], "1990-04-12");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["marital_status"], "married");
    assert_eq!(json["blood_group"], "O+");
    assert_eq!(json["status"], "active");

    let decoded: EmployeeProfile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn validate_rejects_blank_name() {
    let mut profile = EmployeeProfile::new("   ", date(1990, 4, 12));
    assert_eq!(
        profile.validate(),
        Err(EmployeeValidationError::BlankName)
    );

    profile.name = "Amina".to_string();
    assert_eq!(profile.validate(), Ok(()));
}

#[test]
fn validate_rejects_malformed_email() {
    let mut profile = EmployeeProfile::new("Amina", date(1990, 4, 12));
    profile.work_email = "not-an-email".to_string();
    assert_eq!(
        profile.validate(),
        Err(EmployeeValidationError::InvalidEmail(
            "not-an-email".to_string()
        ))
    );
}

#[test]
fn validate_allows_empty_email_fields() {
    let profile = EmployeeProfile::new("Amina", date(1990, 4, 12));
    assert_eq!(profile.validate(), Ok(()));
}

#[test]
fn blank_collection_rows_are_defaults() {
    let bank = BankAccount::default();
    assert!(bank.bank_ac_name.is_empty());
    assert!(bank.bank_routing_no.is_empty());

    let education = EducationEntry::default();
    assert!(education.degree.is_empty());
    assert_eq!(education.passing_year, None);
    assert_eq!(education.result, None);
    assert_eq!(education.result_type, None);
}

#[test]
fn wire_enums_use_snake_case_tokens() {
    assert_eq!(
        serde_json::to_value(ResultType::Cgpa).unwrap(),
        serde_json::Value::String("cgpa".to_string())
    );
    assert_eq!(
        serde_json::to_value(JobType::FullTime).unwrap(),
        serde_json::Value::String("full_time".to_string())
    );
}

#[test]
fn prev_job_duration_requires_usable_dates() {
    let mut job = PreviousJob {
        company_name: "Acme".to_string(),
        designation: "Engineer".to_string(),
        ..PreviousJob::default()
    };
    assert_eq!(job.duration(), None);

    job.start_date = Some(date(2018, 2, 1));
    assert_eq!(job.duration(), None);

    job.end_date = Some(date(2017, 2, 1));
    assert_eq!(job.duration(), None);

    job.end_date = Some(date(2019, 8, 16));
    assert_eq!(
        job.duration(),
        Some(CalendarDuration {
            years: 1,
            months: 6,
            days: 15
        })
    );
}

#[test]
fn employment_duration_spans_joining_to_reference_date() {
    let job = EmployeeJob::new(Uuid::new_v4(), "Engineer", date(2021, 3, 15));
    assert_eq!(
        job.employment_duration(date(2023, 1, 10)),
        Some(CalendarDuration {
            years: 1,
            months: 9,
            days: 26
        })
    );
    assert_eq!(job.employment_duration(date(2021, 3, 1)), None);
}

#[test]
fn promotion_timeline_chains_most_recent_first() {
    let mut job = EmployeeJob::new(Uuid::new_v4(), "Junior", date(2019, 1, 1));
    job.promotions = vec![
        Promotion {
            designation: "Lead".to_string(),
            promotion_date: date(2023, 6, 1),
        },
        Promotion {
            designation: "Senior".to_string(),
            promotion_date: date(2021, 1, 1),
        },
    ];

    let segments = job.promotion_timeline(date(2024, 6, 1));
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].label, "Lead");
    assert_eq!(segments[0].end, date(2024, 6, 1));
    assert_eq!(segments[1].label, "Senior");
    assert_eq!(segments[1].end, date(2023, 6, 1));
}
