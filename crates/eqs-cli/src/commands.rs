use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{debug, info, info_span};

use eqs_cli::config::{Settings, save_settings, settings_path};
use eqs_ingest::{read_dataset_file, read_dataset_text, write_dataset, write_dataset_quoted};
use eqs_model::{
    DatasetFilter, EquipmentRecord, StatusCounts, filter_records, find_by_tag, recent,
};
use eqs_store::{AccessRole, CredentialVerifier, HttpStore, StatusService};
use eqs_validate::DatasetReport;

use crate::cli::{CheckArgs, ConfigArgs, ExportArgs, ListArgs, SignInArgs, UpdateArgs};
use crate::summary::{print_check_summary, print_records, print_reasons, print_status_counts};

/// Signs in with the configured accounts.
pub fn sign_in(args: &SignInArgs, settings: &Settings) -> Result<AccessRole> {
    let (Some(login), Some(password)) = (&args.login, &args.password) else {
        bail!("sign-in required: pass --login and --password or set EQS_LOGIN and EQS_PASSWORD");
    };
    settings
        .credentials()
        .verify(login, password)
        .ok_or_else(|| anyhow!("Usuário ou senha inválidos."))
}

fn connect(settings: &Settings, role: AccessRole) -> Result<StatusService<HttpStore>> {
    let store = HttpStore::new(&settings.store).context("connect to store")?;
    Ok(StatusService::new(store, role))
}

/// Returns true when the dataset would be accepted.
pub fn run_check(args: &CheckArgs, settings: &Settings) -> Result<bool> {
    let _span = info_span!("check", file = %args.file.display()).entered();
    let options = settings.parse_options(args.quoted);
    let records = read_dataset_file(&args.file, &options)
        .with_context(|| format!("check {}", args.file.display()))?;

    let report = DatasetReport::from_records(&records);
    info!(
        rows = report.row_count,
        issues = report.issues.len(),
        "dataset checked"
    );
    print_check_summary(&args.file, &report);
    Ok(report.is_acceptable())
}

pub fn run_replace(args: &CheckArgs, settings: &Settings, role: AccessRole) -> Result<usize> {
    let text = read_dataset_text(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let service = connect(settings, role)?;
    let rows = service.replace_dataset(&text, &settings.parse_options(args.quoted))?;
    println!("Planilha substituída com sucesso! {rows} registros foram carregados.");
    Ok(rows)
}

pub fn run_update(args: &UpdateArgs, settings: &Settings, role: AccessRole) -> Result<()> {
    let service = connect(settings, role)?;
    let known = service.load().context("load equipment list")?;

    let record = args.to_record(find_by_tag(&known, args.tag.trim()));
    let sent = service.submit_update(record, &known, Local::now().naive_local())?;

    println!("Equipamento atualizado com sucesso!");
    print_records(&[&sent]);
    Ok(())
}

pub fn run_list(args: &ListArgs, settings: &Settings, role: AccessRole) -> Result<()> {
    let service = connect(settings, role)?;
    let records = service.load().context("load equipment list")?;

    let mut filter = DatasetFilter::new();
    if let Some(search) = &args.search {
        filter = filter.with_search(search);
    }
    if let Some(status) = args.status {
        filter = filter.with_status(status);
    }
    let source = match args.recent {
        Some(limit) => recent(&records, limit),
        None => &records,
    };
    let shown: Vec<&EquipmentRecord> = filter_records(source, &filter);
    debug!(total = records.len(), shown = shown.len(), "filtered records");

    print_status_counts(&StatusCounts::from_records(&records));
    if shown.is_empty() {
        println!("Nenhum equipamento encontrado.");
    } else {
        print_records(&shown);
    }
    Ok(())
}

pub fn run_reasons() {
    print_reasons();
}

pub fn run_export(args: &ExportArgs, settings: &Settings, role: AccessRole) -> Result<usize> {
    let service = connect(settings, role)?;
    let records = service.load().context("load equipment list")?;

    let text = if args.quoted || settings.parse.quoted_fields {
        write_dataset_quoted(&records)?
    } else {
        write_dataset(&records)
    };
    fs::write(&args.file, text).with_context(|| format!("write {}", args.file.display()))?;

    info!(rows = records.len(), path = %args.file.display(), "dataset exported");
    println!("{} registros salvos em {}", records.len(), args.file.display());
    Ok(records.len())
}

pub fn run_config(args: &ConfigArgs, explicit: Option<&Path>, settings: &Settings) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => settings_path().ok_or_else(|| anyhow!("could not determine settings path"))?,
    };

    if args.init {
        if path.exists() {
            println!("Settings file already exists: {}", path.display());
        } else {
            save_settings(&Settings::default(), &path)?;
            println!("Created {}", path.display());
        }
        return Ok(());
    }

    println!("Settings file: {}", path.display());
    println!(
        "Store endpoint: {}",
        if settings.store.has_endpoint() {
            settings.store.endpoint.as_str()
        } else {
            "(not set)"
        }
    );
    println!("Timeout: {}s", settings.store.timeout().as_secs());
    println!("Quoted fields: {}", settings.parse.quoted_fields);
    for account in &settings.accounts {
        println!("Account: {} ({})", account.login, account.role);
    }
    Ok(())
}
