use anyhow::Result;
use cyberguard::{ReportStatus, Submission};

use crate::support::desk_fixture::{DeskFixture, FlakyAuthority, SCENARIO};

#[test]
fn admin_forwards_pending_report_once() -> Result<()> {
    let mut fixture = DeskFixture::new()?.signed_in(true);
    let Submission::Submitted(id) = fixture.run_conversation(&SCENARIO)? else {
        panic!("expected a submitted report");
    };

    assert_eq!(fixture.desk.pending_reports()?.len(), 1);
    fixture.desk.report_to_authority(&id)?;

    assert!(fixture.desk.pending_reports()?.is_empty());
    assert_eq!(fixture.desk.reports()[0].status, ReportStatus::Reported);
    let forwarded = fixture.authority.forwarded.borrow();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].id, id);
    assert_eq!(forwarded[0].status, ReportStatus::Reported);
    drop(forwarded);

    let again = fixture.desk.report_to_authority(&id);
    assert!(again.is_err(), "second forward should be refused");
    assert_eq!(fixture.authority.forwarded.borrow().len(), 1);
    Ok(())
}

#[test]
fn non_admin_cannot_forward_or_list() -> Result<()> {
    let mut fixture = DeskFixture::new()?.signed_in(false);
    let Submission::Submitted(id) = fixture.run_conversation(&SCENARIO)? else {
        panic!("expected a submitted report");
    };

    let err = fixture.desk.report_to_authority(&id).unwrap_err();
    assert!(
        err.to_string().contains("not an administrator"),
        "unexpected error: {err}"
    );
    assert!(fixture.desk.pending_reports().is_err());
    assert_eq!(fixture.desk.reports()[0].status, ReportStatus::Pending);
    assert!(fixture.authority.forwarded.borrow().is_empty());
    Ok(())
}

#[test]
fn summaries_follow_store_order() -> Result<()> {
    let mut fixture = DeskFixture::new()?.signed_in(true);
    fixture.run_conversation(&SCENARIO)?;
    let summaries = fixture.desk.report_summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].respondent, "Alex (15)");
    assert_eq!(summaries[0].evidence[0].label, "Evidence #1");
    Ok(())
}

#[test]
fn failed_forward_keeps_report_pending_for_retry() -> Result<()> {
    let authority = FlakyAuthority::default();
    authority.down.set(true);
    let mut fixture = DeskFixture::new()?
        .with_authority(Box::new(authority.clone()))
        .signed_in(true);
    let Submission::Submitted(id) = fixture.run_conversation(&SCENARIO)? else {
        panic!("expected a submitted report");
    };

    let err = fixture.desk.report_to_authority(&id).unwrap_err();
    assert!(format!("{err:#}").contains("network down"), "unexpected error: {err:#}");
    assert_eq!(fixture.desk.reports()[0].status, ReportStatus::Pending);
    assert_eq!(fixture.desk.pending_reports()?.len(), 1);

    authority.down.set(false);
    fixture.desk.report_to_authority(&id)?;
    assert_eq!(fixture.desk.reports()[0].status, ReportStatus::Reported);
    let forwarded = authority.forwarded.borrow();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].status, ReportStatus::Reported);
    Ok(())
}
