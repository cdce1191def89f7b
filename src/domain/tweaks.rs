//! Built-in registry tweak catalog.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hive {
    CurrentUser,
    LocalMachine,
}

impl Hive {
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::CurrentUser => "HKCU",
            Self::LocalMachine => "HKLM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegAction {
    Dword(u32),
    /// `REG_SZ`; an empty value name targets the key's default value.
    String(&'static str),
    DeleteValue,
    DeleteTree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegEdit {
    pub hive: Hive,
    pub key: &'static str,
    pub value: &'static str,
    pub action: RegAction,
}

#[derive(Debug, Clone, Copy)]
pub struct Tweak {
    pub id: &'static str,
    pub label: &'static str,
    pub edits: &'static [RegEdit],
}

impl Tweak {
    pub fn needs_machine_hive(&self) -> bool {
        self.edits.iter().any(|e| e.hive == Hive::LocalMachine)
    }
}

const fn dword(hive: Hive, key: &'static str, value: &'static str, data: u32) -> RegEdit {
    RegEdit {
        hive,
        key,
        value,
        action: RegAction::Dword(data),
    }
}

const fn string(hive: Hive, key: &'static str, value: &'static str, data: &'static str) -> RegEdit {
    RegEdit {
        hive,
        key,
        value,
        action: RegAction::String(data),
    }
}

const fn delete_value(hive: Hive, key: &'static str, value: &'static str) -> RegEdit {
    RegEdit {
        hive,
        key,
        value,
        action: RegAction::DeleteValue,
    }
}

const fn delete_tree(hive: Hive, key: &'static str) -> RegEdit {
    RegEdit {
        hive,
        key,
        value: "",
        action: RegAction::DeleteTree,
    }
}

use Hive::{CurrentUser as HKCU, LocalMachine as HKLM};

const CLASSIC_MENU_CLSID: &str = r"Software\Classes\CLSID\{86ca1aa0-34aa-4e8b-a509-50c905bae2a2}";
const CLASSIC_MENU_SERVER: &str =
    r"Software\Classes\CLSID\{86ca1aa0-34aa-4e8b-a509-50c905bae2a2}\InprocServer32";
const COPILOT_POLICY: &str = r"Software\Policies\Microsoft\Windows\WindowsCopilot";
const EXPLORER_ADVANCED: &str = r"Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced";
const DATA_COLLECTION_POLICY: &str = r"SOFTWARE\Policies\Microsoft\Windows\DataCollection";
const DATA_COLLECTION: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Policies\DataCollection";
const WIDGETS_POLICY: &str = r"SOFTWARE\Policies\Microsoft\Dsh";
const CONTENT_DELIVERY: &str = r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager";
const CLOUD_CONTENT_POLICY: &str = r"SOFTWARE\Policies\Microsoft\Windows\CloudContent";
const MOUSE: &str = r"Control Panel\Mouse";
const FILE_SYSTEM: &str = r"SYSTEM\CurrentControlSet\Control\FileSystem";

pub const ENABLE_WIN10_CONTEXT: &str = "enable-win10-context";
pub const DISABLE_WIN10_CONTEXT: &str = "disable-win10-context";
pub const ENABLE_LONG_PATHS: &str = "enable-long-paths";
pub const DISABLE_APP_SUGGESTIONS: &str = "disable-app-suggestions";

pub const CATALOG: &[Tweak] = &[
    Tweak {
        id: ENABLE_WIN10_CONTEXT,
        label: "Enable Windows 10 context menu",
        edits: &[string(HKCU, CLASSIC_MENU_SERVER, "", "")],
    },
    Tweak {
        id: DISABLE_WIN10_CONTEXT,
        label: "Disable Windows 10 context menu",
        edits: &[delete_tree(HKCU, CLASSIC_MENU_CLSID)],
    },
    Tweak {
        id: "disable-copilot",
        label: "Disable Copilot",
        edits: &[
            dword(HKCU, COPILOT_POLICY, "TurnOffWindowsCopilot", 1),
            dword(HKCU, EXPLORER_ADVANCED, "ShowCopilotButton", 0),
        ],
    },
    Tweak {
        id: "enable-copilot",
        label: "Enable Copilot",
        edits: &[
            delete_value(HKCU, COPILOT_POLICY, "TurnOffWindowsCopilot"),
            dword(HKCU, EXPLORER_ADVANCED, "ShowCopilotButton", 1),
        ],
    },
    Tweak {
        id: "disable-telemetry",
        label: "Disable Telemetry",
        edits: &[
            dword(HKLM, DATA_COLLECTION_POLICY, "AllowTelemetry", 0),
            dword(HKLM, DATA_COLLECTION, "AllowTelemetry", 0),
        ],
    },
    Tweak {
        id: "enable-telemetry",
        label: "Enable Telemetry",
        edits: &[
            delete_value(HKLM, DATA_COLLECTION_POLICY, "AllowTelemetry"),
            delete_value(HKLM, DATA_COLLECTION, "AllowTelemetry"),
        ],
    },
    Tweak {
        id: "disable-widgets",
        label: "Disable Taskbar Widgets",
        edits: &[
            dword(HKLM, WIDGETS_POLICY, "AllowNewsAndInterests", 0),
            dword(HKCU, EXPLORER_ADVANCED, "TaskbarDa", 0),
        ],
    },
    Tweak {
        id: "enable-widgets",
        label: "Enable Taskbar Widgets",
        edits: &[
            delete_value(HKLM, WIDGETS_POLICY, "AllowNewsAndInterests"),
            dword(HKCU, EXPLORER_ADVANCED, "TaskbarDa", 1),
        ],
    },
    Tweak {
        id: "disable-windows-suggestions",
        label: "Disable Windows Suggestions",
        edits: &[
            dword(HKCU, CONTENT_DELIVERY, "SystemPaneSuggestionsEnabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SoftLandingEnabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-338388Enabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-338389Enabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-353694Enabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-353696Enabled", 0),
        ],
    },
    Tweak {
        id: "enable-windows-suggestions",
        label: "Enable Windows Suggestions",
        edits: &[
            dword(HKCU, CONTENT_DELIVERY, "SystemPaneSuggestionsEnabled", 1),
            dword(HKCU, CONTENT_DELIVERY, "SoftLandingEnabled", 1),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-338388Enabled", 1),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-338389Enabled", 1),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-353694Enabled", 1),
            dword(HKCU, CONTENT_DELIVERY, "SubscribedContent-353696Enabled", 1),
        ],
    },
    Tweak {
        id: "show-file-extensions",
        label: "Show Extensions for Known File Types",
        edits: &[dword(HKCU, EXPLORER_ADVANCED, "HideFileExt", 0)],
    },
    Tweak {
        id: "show-hidden-folders",
        label: "Show Hidden Folders",
        edits: &[dword(HKCU, EXPLORER_ADVANCED, "Hidden", 1)],
    },
    Tweak {
        id: "disable-pointer-precision",
        label: "Disable Mouse Enhance Pointer Precision",
        edits: &[
            string(HKCU, MOUSE, "MouseSpeed", "0"),
            string(HKCU, MOUSE, "MouseThreshold1", "0"),
            string(HKCU, MOUSE, "MouseThreshold2", "0"),
        ],
    },
    Tweak {
        id: ENABLE_LONG_PATHS,
        label: "Enable Windows long paths",
        edits: &[dword(HKLM, FILE_SYSTEM, "LongPathsEnabled", 1)],
    },
    Tweak {
        id: DISABLE_APP_SUGGESTIONS,
        label: "Disable application suggestions and automatic installation",
        edits: &[
            dword(HKCU, CONTENT_DELIVERY, "ContentDeliveryAllowed", 0),
            dword(HKCU, CONTENT_DELIVERY, "OemPreInstalledAppsEnabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "PreInstalledAppsEnabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "PreInstalledAppsEverEnabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SilentInstalledAppsEnabled", 0),
            dword(HKCU, CONTENT_DELIVERY, "SystemPaneSuggestionsEnabled", 0),
            dword(HKLM, CLOUD_CONTENT_POLICY, "DisableWindowsConsumerFeatures", 1),
        ],
    },
];

pub fn find_tweak(id: &str) -> Option<&'static Tweak> {
    CATALOG.iter().find(|t| t.id.eq_ignore_ascii_case(id))
}
