use forge_core::{ArmorPiece, ArmorSlot, BuildAction, BuildState, Weapon, WeaponClass, transition};
use forge_runtime::repository::{DEFAULT_BUILD_NAME, SAVED_BUILDS_FILE};
use forge_runtime::{FileBuildRepository, RepositoryError, SavedBuildRepository};
use tempfile::TempDir;

fn sample_state() -> BuildState {
    let weapon = Weapon::new(3, "Taroth Sword", WeaponClass::LongSword, 1023);
    let helm = ArmorPiece::new(101, "Brachydium Helm β+", ArmorSlot::Head);

    let state = transition(
        &BuildState::new(),
        &BuildAction::SetWeapon {
            weapon: Some(weapon),
        },
    );
    transition(
        &state,
        &BuildAction::SetArmor {
            slot: ArmorSlot::Head,
            piece: Some(helm),
        },
    )
}

#[test]
fn builds_persist_across_instances() {
    let dir = TempDir::new().unwrap();
    let state = sample_state();

    let saved = {
        let repo = FileBuildRepository::new(dir.path(), 50).unwrap();
        repo.save("Raw build", &state).unwrap().unwrap()
    };
    assert!(dir.path().join(SAVED_BUILDS_FILE).exists());

    let repo = FileBuildRepository::new(dir.path(), 50).unwrap();
    let builds = repo.list().unwrap();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].id, saved.id);
    assert_eq!(builds[0].name, "Raw build");
    assert_eq!(repo.load(&saved.id).unwrap(), Some(state));
}

#[test]
fn list_is_newest_first() {
    let dir = TempDir::new().unwrap();
    let repo = FileBuildRepository::new(dir.path(), 50).unwrap();

    let first = repo.save("first", &BuildState::new()).unwrap().unwrap();
    let second = repo.save("second", &sample_state()).unwrap().unwrap();

    let ids: Vec<_> = repo.list().unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn limit_blocks_further_saves() {
    let dir = TempDir::new().unwrap();
    let repo = FileBuildRepository::new(dir.path(), 2).unwrap();

    repo.save("a", &BuildState::new()).unwrap().unwrap();
    assert!(!repo.is_at_limit().unwrap());
    repo.save("b", &BuildState::new()).unwrap().unwrap();
    assert!(repo.is_at_limit().unwrap());

    assert!(repo.save("c", &BuildState::new()).unwrap().is_none());
    assert_eq!(repo.list().unwrap().len(), 2);
}

#[test]
fn rename_and_delete() {
    let dir = TempDir::new().unwrap();
    let repo = FileBuildRepository::new(dir.path(), 50).unwrap();
    let saved = repo.save("   ", &sample_state()).unwrap().unwrap();
    assert_eq!(saved.name, DEFAULT_BUILD_NAME);

    let renamed = repo.rename(&saved.id, "  Agitator  ").unwrap().unwrap();
    assert_eq!(renamed.name, "Agitator");
    assert!(renamed.updated_at >= saved.updated_at);

    let kept = repo.rename(&saved.id, "").unwrap().unwrap();
    assert_eq!(kept.name, "Agitator");
    assert!(repo.rename("missing", "x").unwrap().is_none());

    assert!(repo.delete(&saved.id).unwrap());
    assert!(!repo.delete(&saved.id).unwrap());
    assert!(repo.get(&saved.id).unwrap().is_none());
}

#[test]
fn corrupted_document_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SAVED_BUILDS_FILE), "{ not json").unwrap();

    let repo = FileBuildRepository::new(dir.path(), 50).unwrap();
    assert!(matches!(
        repo.list(),
        Err(RepositoryError::CorruptedData(_))
    ));
}
