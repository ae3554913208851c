pub const SPLICESCAN_DISPLAY_VERSION: &str = env!("SPLICESCAN_DISPLAY_VERSION");
pub const SPLICESCAN_BUILD_N: &str = env!("SPLICESCAN_BUILD_N");

pub fn version_cli_text() -> String {
    format!(
        "splicescan {}\nBuild {}\nHeuristic exon/intron and splice-site classifier",
        SPLICESCAN_DISPLAY_VERSION, SPLICESCAN_BUILD_N
    )
}
