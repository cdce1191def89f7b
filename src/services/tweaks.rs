//! Registry tweaks: the built-in catalog and `.reg` file imports.

use super::Ctx;
use crate::console::{hl, Log, Spinner};
use crate::domain::tweaks::{self, CATALOG};
use crate::domain::{AppError, Result, Tweak};
use crate::repositories::registry::apply_edit;
use crate::repositories::shell::ShellCommand;
use std::path::{Path, PathBuf};
use tracing::debug;

const RESTART_HINT: &str = "Set registry successfully. you may need to restart your computer.";

/// Catalog as printed by `set-reg --list`.
pub fn catalog_listing() -> String {
    let width = CATALOG.iter().map(|t| t.id.len()).max().unwrap_or(0);
    CATALOG
        .iter()
        .map(|t| {
            let scope = if t.needs_machine_hive() { " (admin)" } else { "" };
            format!("{:<width$}  {}{scope}\n", t.id, t.label)
        })
        .collect()
}

pub fn apply_tweak(ctx: &Ctx<'_>, tweak: &Tweak) -> Result<()> {
    if tweak.needs_machine_hive() {
        ctx.require_admin()?;
    }
    for edit in tweak.edits {
        debug!(hive = edit.hive.short_name(), key = edit.key, value = edit.value, "registry edit");
        apply_edit(ctx.registry, edit)?;
    }
    Ok(())
}

fn import_reg_file(ctx: &Ctx<'_>, file: &Path) -> Result<()> {
    if !file.is_file() {
        return Err(AppError::not_found("registry file", file));
    }
    let path = file.display().to_string();
    ctx.runner
        .run(&ShellCommand::program("regedit.exe", ["/s", path.as_str()]))
        .map(|_| ())
}

fn select_tweaks(ctx: &mut Ctx<'_>) -> Result<Vec<&'static Tweak>> {
    let labels: Vec<String> = CATALOG.iter().map(|t| t.label.to_string()).collect();
    let picked = ctx
        .prompt
        .select_many("Which registry tweaks do you want to set?", &labels)?;
    Ok(picked.into_iter().map(|i| &CATALOG[i]).collect())
}

/// `set-reg`. Stops at the first failing tweak or file.
pub fn set_registry(ctx: &mut Ctx<'_>, ids: &[String], files: &[PathBuf], list: bool) -> Result<()> {
    if list {
        print!("{}", catalog_listing());
        return Ok(());
    }

    let selected = if ids.is_empty() && files.is_empty() {
        select_tweaks(ctx)?
    } else {
        ids.iter()
            .map(|id| tweaks::find_tweak(id).ok_or_else(|| AppError::UnknownTweak(id.clone())))
            .collect::<Result<Vec<_>>>()?
    };

    if selected.is_empty() && files.is_empty() {
        Log::warn("Nothing selected.");
        return Ok(());
    }
    println!();

    for tweak in selected {
        apply_tweak(ctx, tweak).inspect_err(|e| {
            Log::error(format!("Failed to set {}: {e}", hl(tweak.label)));
        })?;
        Log::info(format!("Applied {}", hl(tweak.label)));
    }
    for file in files {
        import_reg_file(ctx, file).inspect_err(|e| {
            Log::error(format!("Failed to import {}: {e}", hl(file.display())));
        })?;
        Log::info(format!("Imported {}", hl(file.display())));
    }

    Log::success(RESTART_HINT);
    Ok(())
}

/// Apply a single catalog tweak with spinner feedback.
pub fn toggle(ctx: &Ctx<'_>, id: &str, progress: &str, done: &str) -> Result<()> {
    let tweak = tweaks::find_tweak(id).ok_or_else(|| AppError::UnknownTweak(id.to_string()))?;

    let mut spinner = Spinner::start(progress);
    match apply_tweak(ctx, tweak) {
        Ok(()) => {
            spinner.success(done);
            Ok(())
        }
        Err(e) => {
            spinner.error(format!("Failed: {}", tweak.label));
            Err(e)
        }
    }
}

pub fn enable_old_menu(ctx: &Ctx<'_>) -> Result<()> {
    toggle(
        ctx,
        tweaks::ENABLE_WIN10_CONTEXT,
        "Enabling Windows 10 context menu...",
        "Windows 10 context menu enabled. Restart Explorer to see the change.",
    )
}

pub fn disable_old_menu(ctx: &Ctx<'_>) -> Result<()> {
    toggle(
        ctx,
        tweaks::DISABLE_WIN10_CONTEXT,
        "Disabling Windows 10 context menu...",
        "Windows 10 context menu disabled. Restart Explorer to see the change.",
    )
}

pub fn enable_long_path(ctx: &Ctx<'_>) -> Result<()> {
    toggle(
        ctx,
        tweaks::ENABLE_LONG_PATHS,
        "Enabling long paths...",
        "Long paths enabled.",
    )
}

pub fn disable_suggestions(ctx: &Ctx<'_>) -> Result<()> {
    toggle(
        ctx,
        tweaks::DISABLE_APP_SUGGESTIONS,
        "Disabling app suggestions...",
        "App suggestions disabled.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Hive;
    use crate::services::testing::*;
    use std::fs;
    use tempfile::TempDir;

    const CLASSIC_SERVER: &str =
        r"Software\Classes\CLSID\{86ca1aa0-34aa-4e8b-a509-50c905bae2a2}\InprocServer32";
    const FILE_SYSTEM: &str = r"SYSTEM\CurrentControlSet\Control\FileSystem";

    #[test]
    fn listing_has_every_tweak() {
        let listing = catalog_listing();
        assert_eq!(listing.lines().count(), CATALOG.len());
        assert!(listing.contains("enable-long-paths"));
        assert!(listing.contains("(admin)"));
    }

    #[test]
    fn old_menu_round_trip() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        enable_old_menu(&ctx).expect("enable");
        assert_eq!(
            registry.get(Hive::CurrentUser, CLASSIC_SERVER, ""),
            Some(Stored::Str(String::new()))
        );

        disable_old_menu(&ctx).expect("disable");
        assert!(registry.values.borrow().is_empty());
    }

    #[test]
    fn long_paths_need_admin() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");

        let plain = ctx(&settings, &runner, &registry, &mut prompt, false);
        let err = enable_long_path(&plain).expect_err("not elevated");
        assert!(matches!(err, AppError::PermissionDenied(_)));

        let mut prompt = answers("");
        let admin = ctx(&settings, &runner, &registry, &mut prompt, true);
        enable_long_path(&admin).expect("elevated");
        assert_eq!(
            registry.get(Hive::LocalMachine, FILE_SYSTEM, "LongPathsEnabled"),
            Some(Stored::Dword(1))
        );
    }

    #[test]
    fn interactive_selection_applies_picked_tweaks() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let index = CATALOG
            .iter()
            .position(|t| t.id == "show-file-extensions")
            .expect("in catalog");
        let mut prompt = answers(&format!("{}\n", index + 1));
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        set_registry(&mut ctx, &[], &[], false).expect("set-reg");
        assert_eq!(
            registry.get(
                Hive::CurrentUser,
                r"Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced",
                "HideFileExt"
            ),
            Some(Stored::Dword(0))
        );
    }

    #[test]
    fn unknown_tweak_is_rejected_before_any_change() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        let ids = vec!["show-hidden-folders".to_string(), "make-it-fast".to_string()];
        let err = set_registry(&mut ctx, &ids, &[], false).expect_err("unknown id");
        assert!(matches!(err, AppError::UnknownTweak(id) if id == "make-it-fast"));
        assert!(registry.values.borrow().is_empty());
    }

    #[test]
    fn first_failure_stops_the_batch() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry {
            deny_machine: true,
            ..MemoryRegistry::default()
        };
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, true);

        let ids = vec!["disable-telemetry".to_string(), "show-hidden-folders".to_string()];
        let err = set_registry(&mut ctx, &ids, &[], false).expect_err("HKLM denied");
        assert!(matches!(err, AppError::PermissionDenied(_)));
        assert!(registry.values.borrow().is_empty());
    }

    #[test]
    fn reg_files_are_imported_silently() {
        let tmp = TempDir::new().expect("temp dir");
        let reg = tmp.path().join("tweak.reg");
        fs::write(&reg, "Windows Registry Editor Version 5.00\n").expect("write");

        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        set_registry(&mut ctx, &[], &[reg.clone()], false).expect("import");
        assert_eq!(
            runner.commands(),
            vec![format!("regedit.exe /s {}", reg.display())]
        );
    }
}
