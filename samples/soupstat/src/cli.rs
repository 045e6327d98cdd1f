use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// How normals are written into the soup.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Shading {
    /// One normal per corner, shared between neighbouring triangles
    Smooth,
    /// One normal per triangle
    Flat,
}

impl std::fmt::Display for Shading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shading::Smooth => f.write_str("smooth"),
            Shading::Flat => f.write_str("flat"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,trisoup=info,hedron=info,soupstat=info",
        env = "SOUPSTAT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Number of grid cells along each axis; each cell is split into two triangles
    #[arg(short, long, default_value = "8,8", value_parser = parse_dims, value_name = "W,H")]
    pub grid: (u32, u32),
    /// Number of distinct materials, assigned to cells in a repeating pattern
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub materials: u16,
    /// How normals are written
    #[arg(short, long, default_value_t = Shading::Smooth)]
    pub shading: Shading,
}

fn parse_dims(s: &str) -> Result<(u32, u32), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let (w, h) = s
        .trim()
        .split_once(',')
        .ok_or("expected two comma-separated values")?;
    Ok((u32::from_str(w.trim())?, u32::from_str(h.trim())?))
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
