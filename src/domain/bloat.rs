//! Bundled Windows applications offered for removal.

pub const EDGE: &str = "Microsoft.Edge";
pub const ONEDRIVE: &str = "Microsoft.OneDrive";

pub const PACKAGES: &[&str] = &[
    EDGE,
    ONEDRIVE,
    "Clipchamp.Clipchamp",
    "Microsoft.3DBuilder",
    "Microsoft.BingFinance",
    "Microsoft.BingFoodAndDrink",
    "Microsoft.BingHealthAndFitness",
    "Microsoft.BingNews",
    "Microsoft.BingSports",
    "Microsoft.BingTranslator",
    "Microsoft.BingTravel",
    "Microsoft.BingWeather",
    "Microsoft.Messaging",
    "Microsoft.Microsoft3DViewer",
    "Microsoft.MicrosoftOfficeHub",
    "Microsoft.MicrosoftPowerBIForWindows",
    "Microsoft.MicrosoftSolitaireCollection",
    "Microsoft.MicrosoftStickyNotes",
    "Microsoft.MixedReality.Portal",
    "Microsoft.NetworkSpeedTest",
    "Microsoft.News",
    "Microsoft.Office.OneNote",
    "Microsoft.Office.Sway",
    "Microsoft.OneConnect",
    "Microsoft.Print3D",
    "Microsoft.SkypeApp",
    "Microsoft.Todos",
    "Microsoft.WindowsAlarms",
    "Microsoft.WindowsFeedbackHub",
    "Microsoft.WindowsMaps",
    "Microsoft.WindowsSoundRecorder",
    "Microsoft.ZuneVideo",
    "MicrosoftCorporationII.MicrosoftFamily",
    "MicrosoftTeams",
    "Microsoft.GetHelp",
    "Microsoft.MSPaint",
    "Microsoft.Paint",
    "Microsoft.Whiteboard",
    "Microsoft.Windows.Photos",
    "Microsoft.WindowsCalculator",
    "Microsoft.WindowsCamera",
    "Microsoft.YourPhone",
    "Microsoft.ZuneMusic",
    "Microsoft.GamingApp",
    "Microsoft.OutlookForWindows",
    "Microsoft.People",
    "Microsoft.PowerAutomateDesktop",
    "Microsoft.windowscommunicationsapps",
    "Microsoft.XboxGameOverlay",
    "Microsoft.XboxGamingOverlay",
    "Windows.DevHome",
];

/// Catalog spelling of `name`, matched case-insensitively.
pub fn canonical(name: &str) -> Option<&'static str> {
    PACKAGES.iter().copied().find(|p| p.eq_ignore_ascii_case(name))
}

pub fn is_known(name: &str) -> bool {
    canonical(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(canonical("microsoft.edge"), Some(EDGE));
        assert_eq!(canonical("MICROSOFT.ONEDRIVE"), Some(ONEDRIVE));
        assert_eq!(canonical("Contoso.App"), None);
        assert!(is_known("microsoft.bingnews"));
    }
}
