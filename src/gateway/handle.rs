//! Gateway for hosts with reusable file handles

use crate::error::RentlogResult;
use crate::models::Document;
use crate::storage::{parse_document_with_report, serialize_document};

use super::host::{FileHandle, HandleHost};
use super::session::PersistenceSession;
use super::{
    DocumentGateway, HostProfile, OpenOutcome, OpenedDocument, SaveOutcome, DEFAULT_FILE_NAME,
};

/// Opens files through a picker and keeps the handle for later saves
pub struct HandleGateway<H> {
    host: H,
    default_name: String,
}

impl<H: HandleHost> HandleGateway<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            default_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Name suggested when the session has no current file
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

fn write_to(handle: &dyn FileHandle, text: &str) -> RentlogResult<SaveOutcome> {
    let name = handle.name();
    handle.write(text).map_err(|e| {
        tracing::error!(file = %name, error = %e, "failed to save document");
        e
    })?;
    tracing::info!(file = %name, bytes = text.len(), "document saved");
    Ok(SaveOutcome::Saved { name })
}

impl<H: HandleHost> DocumentGateway for HandleGateway<H> {
    fn profile(&self) -> HostProfile {
        HostProfile::Handle
    }

    fn open_document(&mut self, session: &mut PersistenceSession) -> RentlogResult<OpenOutcome> {
        let Some(handle) = self.host.pick_file_to_open()? else {
            tracing::debug!("open picker dismissed");
            return Ok(OpenOutcome::Cancelled);
        };

        let name = handle.name();
        let text = handle.read()?;
        let (document, report) = parse_document_with_report(&text).map_err(|e| {
            tracing::warn!(file = %name, error = %e, "rejected data file");
            e
        })?;

        if report.is_from_future() {
            tracing::warn!(file = %name, version = report.found_version, "document written by a newer version");
        }
        for step in &report.applied {
            tracing::info!(file = %name, step, "migrated document");
        }

        // Only a readable document replaces the current file
        session.retain(handle);
        tracing::info!(file = %name, "document opened");

        Ok(OpenOutcome::Opened(OpenedDocument { name, document }))
    }

    fn save_document(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
    ) -> RentlogResult<SaveOutcome> {
        let Some(handle) = session.retained_target() else {
            tracing::debug!("no current file, saving as");
            return self.save_document_as(session, document);
        };

        let text = serialize_document(document)?;
        write_to(handle, &text)
    }

    fn save_document_as(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
    ) -> RentlogResult<SaveOutcome> {
        let text = serialize_document(document)?;
        let suggested = session
            .display_name()
            .unwrap_or(&self.default_name)
            .to_string();

        let Some(handle) = self.host.pick_file_to_save_as(&suggested)? else {
            tracing::debug!("save picker dismissed");
            return Ok(SaveOutcome::Cancelled);
        };

        // Retain before writing so a later save targets the new file even if
        // this write fails
        let handle = session.retain(handle);
        write_to(handle, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentlogError;
    use crate::models::{EntityId, Money, Tenant};
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    /// In-memory disk shared between a host and its handles
    #[derive(Clone, Default)]
    struct Disk {
        files: Rc<RefCell<HashMap<String, String>>>,
        read_only: Rc<RefCell<Vec<String>>>,
    }

    impl Disk {
        fn put(&self, name: &str, contents: &str) {
            self.files.borrow_mut().insert(name.into(), contents.into());
        }

        fn get(&self, name: &str) -> Option<String> {
            self.files.borrow().get(name).cloned()
        }

        fn lock(&self, name: &str) {
            self.read_only.borrow_mut().push(name.into());
        }
    }

    struct MemoryHandle {
        name: String,
        disk: Disk,
    }

    impl FileHandle for MemoryHandle {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn read(&self) -> RentlogResult<String> {
            self.disk
                .get(&self.name)
                .ok_or_else(|| RentlogError::Io(format!("{} vanished", self.name)))
        }

        fn write(&self, contents: &str) -> RentlogResult<()> {
            if self.disk.read_only.borrow().contains(&self.name) {
                return Err(RentlogError::Write("permission denied".into()));
            }
            self.disk.put(&self.name, contents);
            Ok(())
        }
    }

    /// Host whose pickers answer from a script; `None` means dismissed
    struct ScriptedHost {
        disk: Disk,
        answers: VecDeque<Option<&'static str>>,
        suggestions: Vec<String>,
    }

    impl ScriptedHost {
        fn new(disk: &Disk, answers: Vec<Option<&'static str>>) -> Self {
            Self {
                disk: disk.clone(),
                answers: answers.into(),
                suggestions: Vec::new(),
            }
        }

        fn next(&mut self) -> Option<Box<dyn FileHandle>> {
            let name = self.answers.pop_front().flatten()?;
            Some(Box::new(MemoryHandle {
                name: name.into(),
                disk: self.disk.clone(),
            }))
        }
    }

    impl HandleHost for ScriptedHost {
        fn pick_file_to_open(&mut self) -> RentlogResult<Option<Box<dyn FileHandle>>> {
            Ok(self.next())
        }

        fn pick_file_to_save_as(
            &mut self,
            suggested_name: &str,
        ) -> RentlogResult<Option<Box<dyn FileHandle>>> {
            self.suggestions.push(suggested_name.into());
            Ok(self.next())
        }
    }

    fn doc_with_tenant(name: &str) -> Document {
        let mut doc = Document::starter();
        let property_id = doc.properties[0].id;
        let id = doc.id_generator().next_id();
        doc.tenants.push(Tenant::new(id, property_id, name, Money::from_units(5000), None));
        doc
    }

    fn open(gateway: &mut HandleGateway<ScriptedHost>, session: &mut PersistenceSession) -> Document {
        match gateway.open_document(session).unwrap() {
            OpenOutcome::Opened(opened) => opened.document,
            OpenOutcome::Cancelled => panic!("unexpected cancel"),
        }
    }

    #[test]
    fn test_open_retains_handle() {
        let disk = Disk::default();
        let doc = doc_with_tenant("Asha");
        disk.put("a.json", &serialize_document(&doc).unwrap());

        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![Some("a.json")]));
        let mut session = PersistenceSession::new();

        assert_eq!(open(&mut gateway, &mut session), doc);
        assert_eq!(session.display_name(), Some("a.json"));
        assert!(session.has_retained_target());
    }

    #[test]
    fn test_save_writes_to_opened_file_without_prompting() {
        let disk = Disk::default();
        disk.put("a.json", &serialize_document(&Document::starter()).unwrap());

        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![Some("a.json")]));
        let mut session = PersistenceSession::new();
        let mut doc = open(&mut gateway, &mut session);

        doc.properties[0].name = "Renamed".into();
        let outcome = gateway.save_document(&mut session, &doc).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved { name: "a.json".into() });
        assert!(gateway.host().suggestions.is_empty());
        assert_eq!(disk.get("a.json").unwrap(), serialize_document(&doc).unwrap());
    }

    #[test]
    fn test_save_without_target_matches_save_as() {
        let doc = Document::starter();

        let disk_a = Disk::default();
        let mut via_save = HandleGateway::new(ScriptedHost::new(&disk_a, vec![Some("new.json")]));
        let mut session_a = PersistenceSession::new();
        let saved = via_save.save_document(&mut session_a, &doc).unwrap();

        let disk_b = Disk::default();
        let mut via_save_as = HandleGateway::new(ScriptedHost::new(&disk_b, vec![Some("new.json")]));
        let mut session_b = PersistenceSession::new();
        let saved_as = via_save_as.save_document_as(&mut session_b, &doc).unwrap();

        assert_eq!(saved, saved_as);
        assert_eq!(disk_a.get("new.json"), disk_b.get("new.json"));
        assert_eq!(via_save.host().suggestions, vec![DEFAULT_FILE_NAME.to_string()]);
        assert_eq!(session_a.display_name(), session_b.display_name());
    }

    #[test]
    fn test_configured_default_name_is_suggested() {
        let disk = Disk::default();
        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![None]))
            .with_default_name("flats.json");
        let mut session = PersistenceSession::new();

        let outcome = gateway
            .save_document_as(&mut session, &Document::starter())
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert_eq!(gateway.host().suggestions, vec!["flats.json".to_string()]);
        assert!(!session.has_retained_target());
    }

    #[test]
    fn test_save_targets_file_chosen_by_latest_save_as() {
        let disk = Disk::default();
        disk.put("old.json", &serialize_document(&Document::starter()).unwrap());

        let mut gateway = HandleGateway::new(ScriptedHost::new(
            &disk,
            vec![Some("old.json"), Some("copy.json")],
        ));
        let mut session = PersistenceSession::new();
        let mut doc = open(&mut gateway, &mut session);
        let before = disk.get("old.json");

        gateway.save_document_as(&mut session, &doc).unwrap();
        assert_eq!(gateway.host().suggestions, vec!["old.json".to_string()]);

        doc.properties[0].address = "9 New Rd".into();
        let outcome = gateway.save_document(&mut session, &doc).unwrap();

        assert_eq!(outcome.name(), Some("copy.json"));
        assert_eq!(disk.get("old.json"), before);
        assert!(disk.get("copy.json").unwrap().contains("9 New Rd"));
    }

    #[test]
    fn test_cancelled_open_keeps_session() {
        let disk = Disk::default();
        disk.put("a.json", &serialize_document(&Document::starter()).unwrap());

        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![Some("a.json"), None]));
        let mut session = PersistenceSession::new();
        let doc = open(&mut gateway, &mut session);
        let snapshot = serialize_document(&doc).unwrap();

        let outcome = gateway.open_document(&mut session).unwrap();

        assert_eq!(outcome, OpenOutcome::Cancelled);
        assert_eq!(session.display_name(), Some("a.json"));
        assert_eq!(session.retained_target().map(|h| h.name()).as_deref(), Some("a.json"));
        assert_eq!(serialize_document(&doc).unwrap(), snapshot);
    }

    #[test]
    fn test_invalid_file_keeps_previous_target() {
        let disk = Disk::default();
        disk.put("a.json", &serialize_document(&Document::starter()).unwrap());
        disk.put("foo.json", r#"{"foo": 1}"#);
        disk.put("junk.txt", "not json");

        let mut gateway = HandleGateway::new(ScriptedHost::new(
            &disk,
            vec![Some("a.json"), Some("foo.json"), Some("junk.txt")],
        ));
        let mut session = PersistenceSession::new();
        let doc = open(&mut gateway, &mut session);

        let err = gateway.open_document(&mut session).unwrap_err();
        assert!(matches!(err, RentlogError::InvalidDocument(_)));
        let err = gateway.open_document(&mut session).unwrap_err();
        assert!(matches!(err, RentlogError::Parse(_)));

        assert_eq!(session.display_name(), Some("a.json"));
        gateway.save_document(&mut session, &doc).unwrap();
        assert_eq!(disk.get("foo.json").as_deref(), Some(r#"{"foo": 1}"#));
    }

    #[test]
    fn test_cancelled_save_as_keeps_target() {
        let disk = Disk::default();
        disk.put("a.json", &serialize_document(&Document::starter()).unwrap());

        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![Some("a.json"), None]));
        let mut session = PersistenceSession::new();
        let doc = open(&mut gateway, &mut session);

        assert_eq!(
            gateway.save_document_as(&mut session, &doc).unwrap(),
            SaveOutcome::Cancelled
        );
        assert_eq!(session.retained_target().map(|h| h.name()).as_deref(), Some("a.json"));
    }

    #[test]
    fn test_failed_write_still_retains_new_target() {
        let disk = Disk::default();
        disk.lock("locked.json");
        let doc = doc_with_tenant("Asha");
        let snapshot = doc.clone();

        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![Some("locked.json")]));
        let mut session = PersistenceSession::new();

        let err = gateway.save_document_as(&mut session, &doc).unwrap_err();

        assert!(err.is_write_failure());
        assert_eq!(doc, snapshot);
        assert_eq!(session.display_name(), Some("locked.json"));
        assert!(disk.get("locked.json").is_none());
    }

    #[test]
    fn test_open_legacy_file_fills_ledgers() {
        let disk = Disk::default();
        disk.put(
            "legacy.json",
            r#"{"properties": [{"id": 1, "name": "Home", "address": "1 Main St"}],
                "tenants": [{"id": 2, "propertyId": 1, "name": "Ravi", "rent": 4500}]}"#,
        );

        let mut gateway = HandleGateway::new(ScriptedHost::new(&disk, vec![Some("legacy.json")]));
        let mut session = PersistenceSession::new();
        let doc = open(&mut gateway, &mut session);

        assert_eq!(doc.tenants[0].id, EntityId::from_raw(2));
        assert!(doc.tenants[0].bills.is_empty());
        assert!(doc.tenants[0].payments.is_empty());
    }
}
