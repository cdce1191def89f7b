use crate::config::{ShellPreference, ASSETS_ENV, SHELL_ENV};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const PATHS_EXAMPLE: &str = "\
Text file example:
  C:\\Users\\me\\.gitconfig
  %APPDATA%\\Code\\User\\settings.json
  # This is a comment
  D:\\Projects\\notes";

const PACKAGES_EXAMPLE: &str = "\
Text file example:
  firefox
  7zip
  # This is a comment
  vscode";

const ENV_EXAMPLE: &str = "\
Text file example (a line without '=' is appended to PATH):
  ANDROID_HOME=F:\\Android\\Sdk
  F:\\Android\\Sdk\\platform-tools
  # This is a comment
  JAVA_HOME=C:\\Program Files\\Java\\jdk-21";

const SCRIPTS_EXAMPLE: &str = "\
Text file example:
  npm i -g ts-node
  git config --global user.name \"My Name\"
  # This is a comment
  @powershell winget install 7zip

A line ending in ';' continues on the next line.";

#[derive(Parser, Debug)]
#[command(
    name = "win-tools",
    version,
    about = "Windows setup and maintenance toolbox"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    #[arg(
        long,
        global = true,
        env = ASSETS_ENV,
        value_name = "DIR",
        help = "Folder with bundled assets (default: assets/ next to the executable)"
    )]
    pub assets_dir: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = SHELL_ENV,
        value_enum,
        default_value_t = ShellPreference::Auto,
        help = "PowerShell used for scripts"
    )]
    pub shell: ShellPreference,
    #[arg(long, global = true, help = "Do not print the banner")]
    pub no_banner: bool,
    #[arg(short, long, global = true, help = "Print diagnostic logs to stderr")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Restart as administrator before running")]
    pub elevate: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FileListArgs {
    #[arg(
        long,
        visible_aliases = ["txt", "text-file"],
        value_name = "FILE",
        help = "The path to the text file listing the paths"
    )]
    pub text_path: Option<PathBuf>,
    #[arg(
        long,
        visible_aliases = ["backup", "backup-folder"],
        value_name = "DIR",
        help = "The path to the backup folder"
    )]
    pub backup_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up the list of installed Chocolatey packages.
    #[command(visible_aliases = ["backup", "backup-packages"], after_help = PACKAGES_EXAMPLE)]
    ChocoBackup {
        #[arg(long, value_name = "FILE", help = "The path to save the backup text file")]
        path: Option<PathBuf>,
        #[arg(short = 'f', long, help = "Overwrite the backup file without asking")]
        overwrite: bool,
    },
    /// Install every Chocolatey package listed in a backup text file.
    #[command(
        visible_aliases = ["restore", "restore-packages", "install"],
        after_help = PACKAGES_EXAMPLE
    )]
    ChocoRestore {
        #[arg(long, value_name = "FILE", help = "The path to the backup text file")]
        path: Option<PathBuf>,
    },
    /// Copy the files and folders listed in a text file into a backup folder.
    #[command(visible_aliases = ["backup-folders", "backup-paths"], after_help = PATHS_EXAMPLE)]
    BackupFiles(FileListArgs),
    /// Copy backed up files and folders back to their original location.
    #[command(visible_aliases = ["restore-folders", "restore-paths"], after_help = PATHS_EXAMPLE)]
    RestoreFiles(FileListArgs),
    /// Set environment variables from a text file.
    #[command(
        visible_aliases = ["set-environment-variables", "setenv"],
        after_help = ENV_EXAMPLE
    )]
    SetEnv {
        #[arg(long, value_name = "FILE", help = "The path to the environment variables text file")]
        path: Option<PathBuf>,
        #[arg(
            short,
            long,
            visible_alias = "system",
            visible_short_alias = 's',
            help = "Set the variables for all users (requires admin)"
        )]
        machine: bool,
    },
    /// Apply registry tweaks from the built-in catalog or .reg files.
    #[command(visible_alias = "set-registry")]
    SetReg {
        #[arg(long = "tweak", value_name = "ID", help = "Tweak id to apply (see --list)")]
        tweaks: Vec<String>,
        #[arg(long, help = "Print the tweak catalog and exit")]
        list: bool,
        #[arg(long = "file", value_name = "REG", help = ".reg file to import")]
        files: Vec<PathBuf>,
    },
    /// Restore the Windows 10 style context menu.
    #[command(visible_aliases = ["enableoldmenu", "enable-win10-context"])]
    EnableOldMenu,
    /// Go back to the Windows 11 context menu.
    #[command(visible_aliases = ["disableoldmenu", "disable-win10-context"])]
    DisableOldMenu,
    /// Allow paths longer than 260 characters (requires admin).
    #[command(visible_aliases = ["enablelongpath", "long-path"])]
    EnableLongPath,
    /// Stop Windows from suggesting and silently installing apps.
    #[command(visible_alias = "disable-app-suggestions")]
    DisableSuggestions,
    /// Uninstall default Microsoft applications (requires admin).
    #[command(visible_aliases = ["uninstallbloat", "remove-bloat", "removebloat"])]
    UninstallBloat {
        #[arg(long = "package", value_name = "NAME", help = "Package to remove")]
        packages: Vec<String>,
        #[arg(long, conflicts_with = "packages", help = "Remove every package in the built-in list")]
        all: bool,
        #[arg(short, long, help = "Do not ask before removing Microsoft Edge")]
        yes: bool,
    },
    /// Run scripts from a text file that contains scripts (one per line).
    #[command(visible_alias = "runscripts", after_help = SCRIPTS_EXAMPLE)]
    RunScripts {
        #[arg(long, value_name = "FILE", help = "The path to the scripts text file")]
        path: Option<PathBuf>,
        #[arg(
            short,
            long,
            visible_alias = "exit",
            help = "Stop at the first failing script"
        )]
        exit_on_error: bool,
    },
    /// Enable automatic sign-in for a user (requires admin).
    #[command(visible_aliases = ["autologon", "enable-autologon", "enableautologon"])]
    AutoLogon {
        #[arg(long, help = "The username of the user to automatically logon as")]
        username: Option<String>,
        #[arg(long, help = "The domain of the user to automatically logon as")]
        domain: Option<String>,
        #[arg(long, value_name = "N", help = "The number of logons that auto logon will be enabled")]
        auto_logon_count: Option<u32>,
        #[arg(short, long, help = "Remove the system banner to ensure interventionless logon")]
        remove_legal_prompt: bool,
        #[arg(long, value_name = "FILE", help = "Save the current settings to this JSON file first")]
        backup_file: Option<PathBuf>,
    },
    /// Disable Windows firewall, Windows Defender, and Windows Defender Cloud (requires admin).
    #[command(visible_alias = "disable-defender")]
    DisableFirewall,
    /// Reset the start menu pins to a clean template.
    #[command(visible_aliases = ["cleanstartmenu", "clean-startmenu"])]
    CleanStartMenu {
        #[arg(long, value_name = "FILE", help = "Start menu template (default: start2.bin from assets)")]
        template: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("win-tools").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn aliases_reach_the_same_command() {
        for alias in ["choco-restore", "restore", "restore-packages", "install"] {
            assert!(matches!(
                parse(&[alias, "--path", "p.txt"]).command,
                Some(Commands::ChocoRestore { path: Some(_) })
            ));
        }
    }

    #[test]
    fn option_aliases() {
        match parse(&["backup-files", "--txt", "list.txt", "--backup-folder", "out"]).command {
            Some(Commands::BackupFiles(args)) => {
                assert_eq!(args.text_path, Some(PathBuf::from("list.txt")));
                assert_eq!(args.backup_path, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected {other:?}"),
        }

        for flag in ["-m", "--machine", "--system", "-s"] {
            assert!(matches!(
                parse(&["setenv", flag]).command,
                Some(Commands::SetEnv { machine: true, .. })
            ));
        }

        assert!(matches!(
            parse(&["runscripts", "--exit"]).command,
            Some(Commands::RunScripts { exit_on_error: true, .. })
        ));
    }

    #[test]
    fn repeatable_options_collect() {
        match parse(&["set-reg", "--tweak", "disable-copilot", "--tweak", "show-hidden-folders"]).command {
            Some(Commands::SetReg { tweaks, list, files }) => {
                assert_eq!(tweaks, ["disable-copilot", "show-hidden-folders"]);
                assert!(!list);
                assert!(files.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_the_command() {
        let cli = parse(&["disable-firewall", "--no-banner", "--shell", "pwsh"]);
        assert!(cli.global.no_banner);
        assert_eq!(cli.global.shell, ShellPreference::Pwsh);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Cli::try_parse_from(["win-tools", "auto-logon", "--auto-logon-count", "many"]).is_err());
        assert!(Cli::try_parse_from(["win-tools", "uninstall-bloat", "--all", "--package", "x"]).is_err());
        assert!(Cli::try_parse_from(["win-tools", "choco-backup", "--bogus"]).is_err());
    }
}
