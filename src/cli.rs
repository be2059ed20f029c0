use crate::backends::{all_backends, get_backend};
use crate::config::{resolve_names, GenConfig};
use crate::engine::{run_check, run_generate};
use crate::error::{GenError, Result};
use crate::model::GenerateRequest;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "encoder-gen")]
#[command(about = "Generate encode/decode wrapper functions for data-structure names.", long_about = None)]
pub struct Cli {
    /// Type name to generate for; omit to generate the whole name list
    pub type_name: Option<String>,

    /// Serialization backend to wrap
    #[arg(long, default_value = "codec-json")]
    pub backend: String,

    /// Output layout: "bare" (functions only) or "file" (complete Go file)
    #[arg(long, default_value = "bare")]
    pub layout: String,

    /// Go package clause for the file layout
    #[arg(long, default_value = "model")]
    pub package: String,

    /// TOML file with per-backend name lists
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma separated names, overriding config and built-in lists
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Verify the generated region of an existing file instead of printing code
    #[arg(long)]
    pub check: Option<PathBuf>,

    /// List available backends and exit
    #[arg(long)]
    pub list_backends: bool,

    /// Emit JSON instead of human output (with --list-backends)
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.list_backends {
        return list_backends(cli.json, out);
    }

    let backend = get_backend(&cli.backend)?;
    let cfg = match &cli.config {
        Some(p) => {
            let cfg = GenConfig::load(p)?;
            let known: Vec<&str> = all_backends().iter().map(|b| b.id()).collect();
            cfg.warn_unknown(&known);
            Some(cfg)
        }
        None => None,
    };

    let (names, source) = match resolve_names(backend.as_ref(), cli.type_name.as_deref(), &cli.names, cfg.as_ref()) {
        Ok(v) => v,
        Err(GenError::MissingTypeName) => {
            // usage error: report and stop without generating
            writeln!(out, "{}", GenError::MissingTypeName)?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    log::debug!("names from {source:?}: {}", names.len());

    let req = GenerateRequest {
        backend: backend.id().to_string(),
        layout: cli.layout.clone(),
        package: cli.package.clone(),
        names,
    };

    if let Some(path) = &cli.check {
        let report = run_check(&req, path)?;
        if report.up_to_date {
            writeln!(out, "{}: up to date", path.display())?;
            return Ok(());
        }
        write!(out, "{}", report.diff)?;
        return Err(GenError::Drift(path.display().to_string()));
    }

    let code = run_generate(&req)?;
    write!(out, "{code}")?;
    Ok(())
}

fn list_backends<W: Write>(json: bool, out: &mut W) -> Result<()> {
    let infos: Vec<_> = all_backends().iter().map(|b| b.info()).collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
        return Ok(());
    }

    for i in &infos {
        let names = match &i.default_names {
            Some(n) => n.len().to_string(),
            None => "none".to_string(),
        };
        writeln!(out, "{:<14}{}  (names: {names})", i.id, i.about)?;
    }
    Ok(())
}
