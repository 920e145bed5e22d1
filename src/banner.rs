//! Startup banner.

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub bridge: &'a str,
    pub timeout: &'a str,
    pub stale: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             B P I L O T               ║
   ║   the next step, or just do it        ║
   ╚═══════════════════════════════════════╝

   version  {}
   bridge   {}
   timeout  {}
   stale    {}
"#,
        env!("CARGO_PKG_VERSION"),
        info.bridge,
        info.timeout,
        info.stale,
    );
}
