//! Geo-replication sessions

use super::GlusterClient;
use crate::command::{GeoRepAction, GeoRepConfigChange, GeoRepSessionRef, Operation};
use crate::domain::georep::GeoRepSession;
use crate::error::Result;
use crate::mapper;
use indexmap::IndexMap;

impl GlusterClient {
    fn geo_rep_session(
        &self,
        session: &GeoRepSessionRef,
        action: GeoRepAction,
        force: bool,
    ) -> Result<()> {
        self.run_ack(&Operation::GeoRepSession {
            session: session.clone(),
            action,
            force,
        })
    }

    pub fn geo_rep_start(&self, session: &GeoRepSessionRef, force: bool) -> Result<()> {
        self.geo_rep_session(session, GeoRepAction::Start, force)
    }

    pub fn geo_rep_stop(&self, session: &GeoRepSessionRef, force: bool) -> Result<()> {
        self.geo_rep_session(session, GeoRepAction::Stop, force)
    }

    pub fn geo_rep_pause(&self, session: &GeoRepSessionRef, force: bool) -> Result<()> {
        self.geo_rep_session(session, GeoRepAction::Pause, force)
    }

    pub fn geo_rep_resume(&self, session: &GeoRepSessionRef, force: bool) -> Result<()> {
        self.geo_rep_session(session, GeoRepAction::Resume, force)
    }

    /// Sessions keyed by master volume
    ///
    /// `remote` (host, volume) narrows the listing to one session and is
    /// only honoured as a pair.
    pub fn geo_rep_status(
        &self,
        volume: Option<&str>,
        remote: Option<(&str, &str)>,
        detail: bool,
    ) -> Result<IndexMap<String, Vec<GeoRepSession>>> {
        let op = Operation::GeoRepStatus {
            volume: volume.map(str::to_string),
            remote: remote.map(|(host, vol)| (host.to_string(), vol.to_string())),
            detail,
        };
        self.run_xml(&op, |root| mapper::geo_rep_status(root, detail))
    }

    /// Effective configuration of one session
    pub fn geo_rep_config(&self, session: &GeoRepSessionRef) -> Result<IndexMap<String, String>> {
        let op = Operation::GeoRepConfig {
            session: session.clone(),
            change: None,
        };
        self.run_xml(&op, mapper::geo_rep_config)
    }

    pub fn geo_rep_config_set(
        &self,
        session: &GeoRepSessionRef,
        name: &str,
        value: &str,
    ) -> Result<()> {
        self.run_ack(&Operation::GeoRepConfig {
            session: session.clone(),
            change: Some(GeoRepConfigChange::Set {
                name: name.to_string(),
                value: value.to_string(),
            }),
        })
    }

    /// Restore one option to its default
    pub fn geo_rep_config_reset(&self, session: &GeoRepSessionRef, name: &str) -> Result<()> {
        self.run_ack(&Operation::GeoRepConfig {
            session: session.clone(),
            change: Some(GeoRepConfigChange::Reset {
                name: name.to_string(),
            }),
        })
    }
}
