use crate::tests::{FakeGitConfig, identity, temp_store};
use crate::{
    ApplyStep, Identity, IdentityStore, IdentitySwitcher, KEY_SSH_COMMAND, KEY_USER_EMAIL,
    KEY_USER_NAME, SwitchError,
};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, pat, some};

fn keyed(id: &str, name: &str, key: &str) -> Identity {
    Identity::new(id, name, &format!("{name}@example.com"), key).unwrap()
}

// =========================================================================
// ReadGlobalIdentity
// =========================================================================

#[test]
fn given_configured_git_when_read_global_identity_then_returns_values() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    let switcher = IdentitySwitcher::new(&git, store);

    let (name, email) = switcher.read_global_identity();

    assert_that!(name.as_str(), eq("Alice"));
    assert_that!(email.as_str(), eq("alice@example.com"));
}

#[test]
fn given_fresh_system_when_read_global_identity_then_empty_strings() {
    let (_temp, store) = temp_store();
    let switcher = IdentitySwitcher::new(FakeGitConfig::default(), store);

    let (name, email) = switcher.read_global_identity();

    assert!(name.is_empty());
    assert!(email.is_empty());
}

#[test]
fn given_failing_reads_when_read_global_identity_then_empty_strings() {
    let (_temp, store) = temp_store();
    let switcher = IdentitySwitcher::new(FakeGitConfig::failing_reads(), store);

    let (name, email) = switcher.read_global_identity();

    assert!(name.is_empty());
    assert!(email.is_empty());
}

// =========================================================================
// ApplyIdentity
// =========================================================================

#[test]
fn given_two_existing_names_when_apply_then_exactly_one_value_remains() {
    // Given
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.add_value(KEY_USER_NAME, "old one");
    git.add_value(KEY_USER_NAME, "old two");
    git.add_value(KEY_USER_EMAIL, "old@example.com");
    let switcher = IdentitySwitcher::new(&git, store);

    // When
    switcher.apply_identity(&identity("1", "bob")).unwrap();

    // Then
    assert_eq!(git.values(KEY_USER_NAME), vec![String::from("bob")]);
    assert_eq!(git.values(KEY_USER_EMAIL), vec![String::from("bob@example.com")]);
}

#[test]
fn given_windows_key_path_when_apply_then_ssh_command_uses_forward_slashes() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store);

    switcher
        .apply_identity(&keyed("1", "bob", r"C:\keys\id_rsa"))
        .unwrap();

    let values = git.values(KEY_SSH_COMMAND);
    assert_that!(values.len(), eq(1));
    assert_that!(values[0].as_str(), contains_substring("C:/keys/id_rsa"));
    assert_that!(values[0].as_str(), contains_substring("IdentitiesOnly=yes"));
    assert!(!values[0].contains('\\'));
}

#[test]
fn given_no_key_when_apply_then_every_ssh_command_value_removed() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.add_value(KEY_SSH_COMMAND, "ssh -i a");
    git.add_value(KEY_SSH_COMMAND, "ssh -i b");
    let switcher = IdentitySwitcher::new(&git, store);

    switcher.apply_identity(&identity("1", "bob")).unwrap();

    assert!(git.values(KEY_SSH_COMMAND).is_empty());
}

#[test]
fn given_ssh_unset_fails_when_apply_then_still_ok() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.fail_on(KEY_SSH_COMMAND);
    let switcher = IdentitySwitcher::new(&git, store);

    let result = switcher.apply_identity(&identity("1", "bob"));

    assert_that!(result, ok(anything()));
    assert_that!(git.values(KEY_USER_NAME).len(), eq(1));
}

#[test]
fn given_no_key_applied_twice_when_apply_then_second_unset_succeeds() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store);
    let bob = identity("1", "bob");

    switcher.apply_identity(&bob).unwrap();
    let second = switcher.apply_identity(&bob);

    assert_that!(second, ok(anything()));
    let unsets = git
        .calls()
        .iter()
        .filter(|call| call.as_str() == "unset core.sshCommand")
        .count();
    assert_that!(unsets, eq(2));
}

#[test]
fn given_email_write_fails_when_apply_then_step_reported_and_ssh_untouched() {
    // Given
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.fail_on(KEY_USER_EMAIL);
    let switcher = IdentitySwitcher::new(&git, store);

    // When
    let result = switcher.apply_identity(&keyed("1", "bob", "/keys/bob"));

    // Then
    assert_that!(result.unwrap_err().failed_step(), some(eq(ApplyStep::UserEmail)));
    assert!(git.values(KEY_SSH_COMMAND).is_empty());
    assert!(!git.calls().iter().any(|c| c.contains("sshCommand")));
}

#[test]
fn given_ssh_write_fails_when_apply_then_ssh_step_reported() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.fail_on(KEY_SSH_COMMAND);
    let switcher = IdentitySwitcher::new(&git, store);

    let result = switcher.apply_identity(&keyed("1", "bob", "/keys/bob"));

    let error = result.unwrap_err();
    assert_that!(error.failed_step(), some(eq(ApplyStep::SshCommand)));
    assert_that!(error.to_string().as_str(), contains_substring("core.sshCommand"));
}

// =========================================================================
// Switch
// =========================================================================

#[test]
fn given_known_id_when_switch_then_active_updated_and_persisted() {
    // Given
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store.clone());
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();
    identities.add(identity("2", "carol")).unwrap();

    // When
    let applied = switcher.switch_to(&mut identities, "2").unwrap();

    // Then
    assert_that!(applied.name.as_str(), eq("carol"));
    assert_that!(identities.active_id(), some(eq("2")));
    assert_that!(store.load().unwrap().active_id(), some(eq("2")));
    assert_eq!(git.values(KEY_USER_NAME), vec![String::from("carol")]);
}

#[test]
fn given_apply_fails_when_switch_then_active_unchanged_and_not_saved() {
    // Given
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.fail_on(KEY_USER_EMAIL);
    let switcher = IdentitySwitcher::new(&git, store.clone());
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();
    identities.add(identity("2", "carol")).unwrap();
    identities.set_active("1").unwrap();
    store.save(&identities).unwrap();

    // When
    let result = switcher.switch_to(&mut identities, "2");

    // Then
    assert!(result.is_err());
    assert_that!(identities.active_id(), some(eq("1")));
    assert_that!(store.load().unwrap().active_id(), some(eq("1")));
}

#[test]
fn given_unknown_id_when_switch_then_unknown_identity_and_git_untouched() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store);
    let mut identities = IdentityStore::default();

    let result = switcher.switch_to(&mut identities, "404");

    assert_that!(result, err(pat!(SwitchError::UnknownIdentity { .. })));
    assert!(git.calls().is_empty());
}

// =========================================================================
// First-run import
// =========================================================================

#[test]
fn given_empty_store_and_global_identity_when_load_then_imported_and_active() {
    // Given
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    let mut switcher = IdentitySwitcher::new(&git, store.clone());

    // When
    let identities = switcher.load().unwrap();

    // Then
    assert_that!(identities.len(), eq(1));
    let imported = &identities.identities()[0];
    assert_that!(imported.name.as_str(), eq("Alice"));
    assert_that!(imported.email.as_str(), eq("alice@example.com"));
    assert!(!imported.has_ssh_key());
    assert_that!(identities.active_id(), some(eq(imported.id.as_str())));
    assert_eq!(store.load().unwrap(), identities);
}

#[test]
fn given_import_already_ran_when_import_again_then_no_duplicate() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    let mut switcher = IdentitySwitcher::new(&git, store);
    let mut identities = switcher.load().unwrap();

    let second = switcher.import_on_first_run(&mut identities).unwrap();

    assert_that!(second, none());
    assert_that!(identities.len(), eq(1));
}

#[test]
fn given_new_switcher_and_non_empty_store_when_load_then_nothing_imported() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    IdentitySwitcher::new(&git, store.clone()).load().unwrap();

    let identities = IdentitySwitcher::new(&git, store).load().unwrap();

    assert_that!(identities.len(), eq(1));
}

#[test]
fn given_store_emptied_after_import_when_import_again_then_runs_once_per_switcher() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    let mut switcher = IdentitySwitcher::new(&git, store);
    let mut identities = switcher.load().unwrap();
    let id = identities.identities()[0].id.clone();
    identities.remove(&id);

    let again = switcher.import_on_first_run(&mut identities).unwrap();

    assert_that!(again, none());
    assert!(identities.is_empty());
}

#[test]
fn given_only_name_configured_when_load_then_nothing_imported() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    git.add_value(KEY_USER_NAME, "Alice");
    let mut switcher = IdentitySwitcher::new(&git, store.clone());

    let identities = switcher.load().unwrap();

    assert!(identities.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn given_existing_identities_when_import_then_store_untouched() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    let mut switcher = IdentitySwitcher::new(&git, store);
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();

    let imported = switcher.import_on_first_run(&mut identities).unwrap();

    assert_that!(imported, none());
    assert_that!(identities.len(), eq(1));
    assert_that!(identities.active_id(), none());
}

#[test]
fn given_corrupted_store_when_load_then_error_and_no_import() {
    let (_temp, store) = temp_store();
    std::fs::write(store.path(), "not json").unwrap();
    let git = FakeGitConfig::with_identity("Alice", "alice@example.com");
    let mut switcher = IdentitySwitcher::new(&git, store.clone());

    let result = switcher.load();

    assert!(matches!(result, Err(SwitchError::Store(_))));
    assert_that!(
        std::fs::read_to_string(store.path()).unwrap().as_str(),
        eq("not json")
    );
}

// =========================================================================
// Add / Update / Delete / Status
// =========================================================================

#[test]
fn given_active_identity_when_delete_then_cleared_and_persisted() {
    // Given
    let (_temp, store) = temp_store();
    let switcher = IdentitySwitcher::new(FakeGitConfig::default(), store.clone());
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();
    identities.add(identity("2", "carol")).unwrap();
    identities.set_active("1").unwrap();

    // When
    let removed = switcher.delete_identity(&mut identities, "1").unwrap();

    // Then
    assert!(removed);
    let reloaded = store.load().unwrap();
    assert_that!(reloaded.active_id(), none());
    assert_that!(reloaded.len(), eq(1));
    assert_that!(reloaded.identities()[0].name.as_str(), eq("carol"));
}

#[test]
fn given_unknown_id_when_delete_then_false_and_nothing_written() {
    let (_temp, store) = temp_store();
    let switcher = IdentitySwitcher::new(FakeGitConfig::default(), store.clone());
    let mut identities = IdentityStore::default();

    let removed = switcher.delete_identity(&mut identities, "1").unwrap();

    assert!(!removed);
    assert!(!store.path().exists());
}

#[test]
fn given_new_identity_when_add_then_persisted() {
    let (_temp, store) = temp_store();
    let switcher = IdentitySwitcher::new(FakeGitConfig::default(), store.clone());
    let mut identities = IdentityStore::default();

    switcher
        .add_identity(&mut identities, identity("1", "bob"))
        .unwrap();

    assert_that!(store.load().unwrap().len(), eq(1));
}

#[test]
fn given_active_identity_when_update_then_saved_but_git_not_reapplied() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store.clone());
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();
    switcher.switch_to(&mut identities, "1").unwrap();

    let updated = switcher
        .update_identity(&mut identities, "1", "Robert", "robert@example.com", "")
        .unwrap();

    assert_that!(updated.name.as_str(), eq("Robert"));
    assert_that!(store.load().unwrap().find("1").unwrap().name.as_str(), eq("Robert"));
    assert_eq!(git.values(KEY_USER_NAME), vec![String::from("bob")]);
}

#[test]
fn given_matching_global_identity_when_status_then_matches_active() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store);
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();
    switcher.switch_to(&mut identities, "1").unwrap();

    let status = switcher.current_status(&identities);

    assert!(status.is_configured());
    assert!(status.matches_active());
}

#[test]
fn given_global_changed_outside_when_status_then_not_matching() {
    let (_temp, store) = temp_store();
    let git = FakeGitConfig::default();
    let switcher = IdentitySwitcher::new(&git, store);
    let mut identities = IdentityStore::default();
    identities.add(identity("1", "bob")).unwrap();
    switcher.switch_to(&mut identities, "1").unwrap();
    git.add_value(KEY_USER_NAME, "someone else");

    let status = switcher.current_status(&identities);

    assert_that!(status.name.as_str(), eq("someone else"));
    assert!(!status.matches_active());
}
