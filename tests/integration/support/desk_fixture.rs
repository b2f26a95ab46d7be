use super::super::IntegrationHarness;
use anyhow::{bail, Result};
use cyberguard::reports::{AuthorityChannel, Geocoder, Location, Report};
use cyberguard::{AppConfig, EventLog, ReportDesk, Submission, User};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const SCENARIO: [&str; 7] = [
    "Alex",
    "15",
    "Karnataka",
    "Bengaluru Urban",
    "Bengaluru",
    "Harassment",
    "http://evidence.example/1",
];

/// Always answers with the same point so clustering is predictable.
pub struct FixedGeocoder {
    pub lat: f64,
    pub lng: f64,
}

impl Geocoder for FixedGeocoder {
    fn locate(&mut self, address: &str) -> Location {
        Location {
            lat: self.lat,
            lng: self.lng,
            address: address.to_string(),
        }
    }
}

/// Keeps forwarded reports for inspection.
#[derive(Clone, Default)]
pub struct RecordingAuthority {
    pub forwarded: Rc<RefCell<Vec<Report>>>,
}

impl AuthorityChannel for RecordingAuthority {
    fn forward(&mut self, report: &Report) -> Result<()> {
        self.forwarded.borrow_mut().push(report.clone());
        Ok(())
    }
}

/// Refuses every forward while `down` is set.
#[derive(Clone, Default)]
pub struct FlakyAuthority {
    pub down: Rc<Cell<bool>>,
    pub forwarded: Rc<RefCell<Vec<Report>>>,
}

impl AuthorityChannel for FlakyAuthority {
    fn forward(&mut self, report: &Report) -> Result<()> {
        if self.down.get() {
            bail!("network down");
        }
        self.forwarded.borrow_mut().push(report.clone());
        Ok(())
    }
}

pub struct DeskFixture {
    pub harness: IntegrationHarness,
    pub desk: ReportDesk,
    pub authority: RecordingAuthority,
}

impl DeskFixture {
    pub fn new() -> Result<Self> {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Result<Self> {
        let harness = IntegrationHarness::new();
        let authority = RecordingAuthority::default();
        let desk = ReportDesk::new(config, EventLog::at(harness.events_path()))?
            .with_geocoder(Box::new(FixedGeocoder {
                lat: 12.9716,
                lng: 77.5946,
            }))
            .with_authority(Box::new(authority.clone()));
        Ok(Self {
            harness,
            desk,
            authority,
        })
    }

    /// Desk whose event log path is occupied by a directory, so every write fails.
    pub fn with_unwritable_log() -> Result<Self> {
        let harness = IntegrationHarness::new();
        std::fs::create_dir_all(harness.events_path())?;
        let authority = RecordingAuthority::default();
        let desk = ReportDesk::new(&AppConfig::default(), EventLog::at(harness.events_path()))?
            .with_authority(Box::new(authority.clone()));
        Ok(Self {
            harness,
            desk,
            authority,
        })
    }

    pub fn with_authority(self, authority: Box<dyn AuthorityChannel>) -> Self {
        let desk = self.desk.with_authority(authority);
        Self {
            harness: self.harness,
            desk,
            authority: self.authority,
        }
    }

    pub fn signed_in(mut self, admin: bool) -> Self {
        self.desk
            .sign_in(User::new("alex", "alex@example.org").with_admin(admin));
        self
    }

    /// Runs one whole conversation and returns the final turn.
    pub fn run_conversation(&mut self, answers: &[&str]) -> Result<Submission> {
        let mut last = Submission::Ignored;
        for answer in answers {
            last = self.desk.submit_answer(answer)?;
        }
        Ok(last)
    }
}
