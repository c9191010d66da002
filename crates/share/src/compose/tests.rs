use pretty_assertions::assert_eq;
use tally_model::{DocSnapshot, Role};

use super::*;

fn links() -> DocLinks {
	DocLinks {
		download_url: "/api/doc/sb3Pw/download".into(),
		csv_url: "/api/doc/sb3Pw/download/csv".into(),
	}
}

fn live<'a>(links: &'a DocLinks) -> ShareContext<'a> {
	ShareContext {
		shell: Shell::Hosted,
		links: Some(links),
	}
}

fn loading() -> ShareContext<'static> {
	ShareContext::default()
}

fn has_action(spec: &ShareButtonSpec, pred: impl Fn(&MenuAction) -> bool) -> bool {
	spec.entries.iter().any(|entry| match entry {
		MenuEntry::Item(item) => pred(&item.action),
		_ => false,
	})
}

#[test]
fn trunk_menu_offers_duplicate_and_work_on_copy() {
	let doc = DocSnapshot::new("sb3Pw", "Budget", Role::Owner).unwrap();
	let links = links();
	let spec = compose(&doc, &live(&links));
	assert_eq!(spec.primary, None);
	assert_eq!(
		spec.entries,
		vec![
			MenuEntry::item(MenuAction::ManageUsers),
			MenuEntry::Divider,
			MenuEntry::item(MenuAction::SaveCopy {
				title: "Duplicate Document",
			}),
			MenuEntry::item(MenuAction::WorkOnCopy),
			MenuEntry::Note("Edit without affecting the original"),
			MenuEntry::Divider,
			MenuEntry::item(MenuAction::Export(ExportTarget::Download {
				url: "/api/doc/sb3Pw/download".into(),
			})),
			MenuEntry::item(MenuAction::Export(ExportTarget::Csv {
				url: "/api/doc/sb3Pw/download/csv".into(),
			})),
		]
	);
}

#[test]
fn trunk_never_links_back_to_an_original() {
	let doc = DocSnapshot::new("sb3Pw", "Budget", Role::Owner).unwrap();
	let links = links();
	let spec = compose(&doc, &live(&links));
	assert!(!has_action(&spec, |action| {
		matches!(
			action,
			MenuAction::ReturnToOriginal { .. } | MenuAction::ReplaceOriginal { .. }
		)
	}));
}

#[test]
fn non_owner_sees_manage_users_disabled() {
	let doc = DocSnapshot::new("sb3Pw", "Budget", Role::Viewer).unwrap();
	let spec = compose(&doc, &loading());
	assert_eq!(
		spec.entries[0],
		MenuEntry::item_enabled(MenuAction::ManageUsers, false)
	);
	assert!(
		!spec
			.enabled_actions()
			.any(|action| matches!(action, MenuAction::ManageUsers))
	);
}

#[test]
fn loading_document_omits_live_sections() {
	let doc = DocSnapshot::new("sb3Pw", "Budget", Role::Owner).unwrap();
	let spec = compose(&doc, &loading());
	assert_eq!(
		spec.entries,
		vec![
			MenuEntry::item(MenuAction::ManageUsers),
			MenuEntry::Divider,
			MenuEntry::item(MenuAction::SaveCopy {
				title: "Duplicate Document",
			}),
		]
	);
}

#[test]
fn snapshot_primary_goes_back_to_current() {
	let doc = DocSnapshot::new("sb3Pw~f1~7@v3", "Budget", Role::Owner)
		.unwrap()
		.with_trunk_access(Role::Owner);
	let links = links();
	let spec = compose(&doc, &live(&links));
	let primary = spec.primary.clone().unwrap();
	assert_eq!(primary.label, "Back to Current");
	assert_eq!(
		primary.action,
		Some(PrimaryAction::BackToCurrent {
			target: UrlTarget::Doc("sb3Pw~f1~7".into()),
		})
	);
	assert!(spec.entries.contains(&MenuEntry::item(MenuAction::ReturnToOriginal {
		target: UrlTarget::Doc("sb3Pw~f1~7".into()),
		label: "Return to Current Version".into(),
	})));
	assert!(spec.entries.contains(&MenuEntry::item(MenuAction::ReplaceOriginal {
		label: "Replace Current Version...".into(),
	})));
}

#[test]
fn snapshot_without_trunk_edit_access_cannot_replace() {
	let doc = DocSnapshot::new("sb3Pw@v3", "Budget", Role::Viewer).unwrap();
	let spec = compose(&doc, &loading());
	assert!(spec.entries.contains(&MenuEntry::item_enabled(
		MenuAction::ReplaceOriginal {
			label: "Replace Current Version...".into(),
		},
		false,
	)));
}

#[test]
fn fork_with_trunk_edit_access_shows_an_inert_unsaved_tag() {
	let doc = DocSnapshot::new("sb3Pw~f1abc", "Budget", Role::Owner)
		.unwrap()
		.with_trunk_access(Role::Editor);
	let spec = compose(&doc, &loading());
	let primary = spec.primary.clone().unwrap();
	assert_eq!(primary.label, "Unsaved");
	assert_eq!(primary.action, None);
	assert!(spec.entries.contains(&MenuEntry::item(MenuAction::ReplaceOriginal {
		label: "Replace Original...".into(),
	})));
}

#[test]
fn fork_without_trunk_edit_access_saves_a_copy_instead() {
	let doc = DocSnapshot::new("sb3Pw~f1abc", "Budget", Role::Owner)
		.unwrap()
		.with_trunk_access(Role::Viewer);
	let spec = compose(&doc, &loading());
	let primary = spec.primary.clone().unwrap();
	assert_eq!(primary.label, "Save Copy");
	assert_eq!(
		primary.action,
		Some(PrimaryAction::SaveCopy { title: "Save Copy" })
	);
	assert!(spec.entries.contains(&MenuEntry::item(MenuAction::ReturnToOriginal {
		target: UrlTarget::Doc("sb3Pw".into()),
		label: "Return to Original".into(),
	})));
	assert!(spec.entries.contains(&MenuEntry::item_enabled(
		MenuAction::ReplaceOriginal {
			label: "Replace Original...".into(),
		},
		false,
	)));
}

#[test]
fn pre_fork_trunk_saves_a_copy() {
	let doc = DocSnapshot::new("sb3Pw", "Budget", Role::Viewer)
		.unwrap()
		.pre_fork();
	let spec = compose(&doc, &loading());
	let primary = spec.primary.clone().unwrap();
	assert_eq!(primary.label, "Save Copy");
	assert_eq!(
		primary.action,
		Some(PrimaryAction::SaveCopy { title: "Save Copy" })
	);
	assert!(!has_action(&spec, |action| {
		matches!(action, MenuAction::ReturnToOriginal { .. })
	}));
}

#[test]
fn bare_fork_saves_the_document() {
	let doc = DocSnapshot::new("new~f9", "Untitled document", Role::Owner).unwrap();
	let spec = compose(&doc, &loading());
	let primary = spec.primary.clone().unwrap();
	assert_eq!(primary.label, "Save Document");
	assert_eq!(
		primary.action,
		Some(PrimaryAction::SaveCopy {
			title: "Save Document",
		})
	);
}

#[test]
fn desktop_shell_reveals_instead_of_downloading() {
	let doc = DocSnapshot::new("sb3Pw", "Budget", Role::Owner).unwrap();
	let links = links();
	let spec = compose(
		&doc,
		&ShareContext {
			shell: Shell::Desktop,
			links: Some(&links),
		},
	);
	assert!(has_action(&spec, |action| {
		matches!(action, MenuAction::Export(ExportTarget::ShowInFolder))
	}));
	assert!(!has_action(&spec, |action| {
		matches!(action, MenuAction::Export(ExportTarget::Download { .. }))
	}));
}

#[test]
fn work_on_copy_is_a_trunk_only_offer() {
	let links = links();
	let fork = DocSnapshot::new("sb3Pw~f1", "Budget", Role::Owner).unwrap();
	assert!(!has_action(&compose(&fork, &live(&links)), |action| {
		matches!(action, MenuAction::WorkOnCopy)
	}));
	let snapshot = DocSnapshot::new("sb3Pw@v1", "Budget", Role::Owner).unwrap();
	assert!(!has_action(&compose(&snapshot, &live(&links)), |action| {
		matches!(action, MenuAction::WorkOnCopy)
	}));
}

#[test]
fn menus_are_tidy_in_every_mode() {
	let docs = vec![
		DocSnapshot::new("sb3Pw", "Budget", Role::Owner).unwrap(),
		DocSnapshot::new("sb3Pw", "Budget", Role::Viewer).unwrap().pre_fork(),
		DocSnapshot::new("new~f9", "Untitled document", Role::Owner).unwrap(),
		DocSnapshot::new("sb3Pw~f1", "Budget", Role::Editor)
			.unwrap()
			.with_trunk_access(Role::Editor),
		DocSnapshot::new("sb3Pw~f1@v2", "Budget", Role::Editor).unwrap(),
	];
	let all_links = links();
	for doc in &docs {
		for links in [None, Some(&all_links)] {
			let spec = compose(
				doc,
				&ShareContext {
					shell: Shell::Hosted,
					links,
				},
			);
			assert!(!spec.entries.is_empty());
			assert!(!matches!(spec.entries.last(), Some(MenuEntry::Divider)));
			for pair in spec.entries.windows(2) {
				assert!(pair != [MenuEntry::Divider, MenuEntry::Divider]);
			}
		}
	}
}
