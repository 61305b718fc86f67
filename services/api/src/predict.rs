use crate::infra::parse_years;
use clap::Args;
use salary_whisperer::config::AppConfig;
use salary_whisperer::error::AppError;
use salary_whisperer::estimator::{
    write_predictions, BatchEstimator, CategoryCatalog, CategoryOption, PredictionService,
    PredictionView, ProfileSubmission,
};
use serde_json::json;
use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Years of professional experience (0-50)
    #[arg(long, value_parser = parse_years)]
    pub(crate) years: f64,
    /// Highest education level tag, e.g. `bachelor`
    #[arg(long)]
    pub(crate) education: String,
    /// Job role tag, e.g. `software-engineer`
    #[arg(long)]
    pub(crate) role: String,
    /// Location tag, e.g. `san-francisco`
    #[arg(long)]
    pub(crate) location: String,
    /// Company size tag, e.g. `startup`
    #[arg(long = "company-size")]
    pub(crate) company_size: String,
    /// Emit the raw prediction as JSON instead of a result card
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with years_experience, education, job_role, location, company_size columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write results here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

impl PredictArgs {
    fn submission(&self) -> ProfileSubmission {
        ProfileSubmission {
            years_experience: self.years,
            education: self.education.clone(),
            job_role: self.role.clone(),
            location: self.location.clone(),
            company_size: self.company_size.clone(),
        }
    }
}

pub(crate) async fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = PredictionService::new(config.prediction);
    let record = service.predict(args.submission()).await?;
    let view = PredictionView::new(&record.profile, &record.prediction);

    if args.json {
        let payload = json!({
            "profile": record.profile,
            "prediction": record.prediction,
            "view": view,
        });
        println!("{payload:#}");
    } else {
        print!("{}", render_card(&view));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = BatchEstimator::from_path(&args.input)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_predictions(file, &rows)?;
            let failed = rows.iter().filter(|row| row.outcome.is_err()).count();
            println!(
                "Estimated {} of {} profiles -> {}",
                rows.len() - failed,
                rows.len(),
                path.display()
            );
        }
        None => write_predictions(io::stdout().lock(), &rows)?,
    }

    Ok(())
}

pub(crate) fn run_options() {
    print!("{}", render_catalog(&CategoryCatalog::standard()));
}

fn render_card(view: &PredictionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Estimated Annual Salary: {}", view.estimated_salary);
    let _ = writeln!(out, "Salary Range: {}", view.salary_range);
    let _ = writeln!(out, "Confidence: {}", view.confidence_label);
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Factors");
    for entry in &view.factors {
        let _ = writeln!(out, "  {:<22}{}%", entry.label, entry.weight);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Profile");
    let summary = &view.summary;
    for line in [
        &summary.experience,
        &summary.background,
        &summary.location,
        &summary.company,
    ] {
        let _ = writeln!(out, "  {line}");
    }
    out
}

fn render_catalog(catalog: &CategoryCatalog) -> String {
    let sections: [(&str, &[CategoryOption]); 4] = [
        ("education", &catalog.education),
        ("role", &catalog.job_roles),
        ("location", &catalog.locations),
        ("company-size", &catalog.company_sizes),
    ];

    let mut out = String::new();
    for (name, options) in sections {
        let _ = writeln!(out, "{name}:");
        for option in options {
            let _ = writeln!(out, "  {:<20}{}", option.tag, option.label);
        }
    }
    out
}
