//! Document contents for a release-ready project

pub const PROJECT_OVERVIEW: &str = "# Project Overview\n\nPatient vitals dashboard for ward nurses.\n";

pub const REQUIREMENTS: &str = "\
# Requirements

## Business Requirements
- Nurses see current vitals for their patients.

## Technical Requirements
- Dashboard refreshes every 30 seconds.
";

pub const REQUIREMENTS_WITHOUT_TECHNICAL: &str = "\
# Requirements

## Business Requirements
- Nurses see current vitals for their patients.
";

pub const FUNCTIONAL_REQUIREMENTS: &str = "# Functional Requirements\n\n- FR-1 Display vitals\n";

pub const PROCESS_FLOWS: &str = "# Process Flows\n\n1. Nurse logs in\n2. Nurse opens ward view\n";

pub const RISK_MITIGATION: &str = "\
# Risk Mitigation

## Identified Risks
- Stale readings

## Mitigation Strategies
- Show last refresh time
";

pub const TEST_PLAN: &str = "\
# Test Plan

## Test Scope
Dashboard and login.

### Test Types
Unit, regression, UAT.

### Acceptance Criteria
All user stories covered.
";

pub const UAT_PLAN: &str = "# UAT Plan\n\nWard 4 nurses run the UAT cases.\n";

pub const USER_STORIES: &str = "\
# User Stories

- As a nurse, I want to view patient vitals
- As a charge nurse, I want to see alerts for abnormal readings
";

pub const RELEASE_NOTES: &str = "\
# Release Notes

## Release Version
1.4.0

## Summary
Vitals dashboard.

## Included Changes
- Alerts panel
";

pub const UNIT_TESTS: &str = "# Unit Tests\n\n- UT-001: vitals parser\n";

pub const REGRESSION_TESTS: &str = "# Regression Tests\n\n- RT-001: login still works\n";

pub const UAT_TEST_CASES_EXPLICIT: &str = "\
# UAT Test Cases

- [x] TC-001: Nurse opens dashboard and sees vitals
User Story: As a nurse, I want to view patient vitals

- [ ] TC-002: Abnormal heart rate raises an alert
**User Story:** As a charge nurse, I want to see alerts for abnormal readings
";

pub const UAT_TEST_CASES_HEURISTIC: &str = "\
# UAT Test Cases

TC-001: Verify nurse can view patient vitals on dashboard
TC-002: Verify charge nurse sees alerts for abnormal readings
";

/// Every required document with release-ready content, keyed by relative path
pub fn ready_documents() -> Vec<(&'static str, &'static str)> {
    vec![
        ("docs/project-overview.md", PROJECT_OVERVIEW),
        ("docs/requirements.md", REQUIREMENTS),
        ("docs/functional-requirements.md", FUNCTIONAL_REQUIREMENTS),
        ("docs/process-flows.md", PROCESS_FLOWS),
        ("docs/risk-mitigation.md", RISK_MITIGATION),
        ("docs/test-plan.md", TEST_PLAN),
        ("docs/uat-plan.md", UAT_PLAN),
        ("docs/user-stories.md", USER_STORIES),
        ("docs/release-notes.md", RELEASE_NOTES),
        ("test-cases/unit-tests.md", UNIT_TESTS),
        ("test-cases/regression-tests.md", REGRESSION_TESTS),
        ("test-cases/uat-test-cases.md", UAT_TEST_CASES_EXPLICIT),
    ]
}
