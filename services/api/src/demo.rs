use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use symptom_triage::domains::headache::{
    AssociatedSymptoms, Frequency, HeadacheSubmission, HeadacheTriageService, Onset, PainLocation,
    PainQuality, RiskFactors,
};
use symptom_triage::engine::TriageOutcome;
use symptom_triage::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a JSON file holding a single headache submission
    pub(crate) submission: PathBuf,
    /// Print the full result envelope as JSON instead of the readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only walk scenarios whose name contains this substring
    #[arg(long)]
    pub(crate) scenario: Option<String>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.submission)?;
    let submission: HeadacheSubmission = serde_json::from_str(&raw)?;

    let service = HeadacheTriageService::new();
    let outcome = service.triage(submission)?;

    if args.json {
        match serde_json::to_string_pretty(&outcome.result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Result unavailable: {err}"),
        }
        return Ok(());
    }

    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = HeadacheTriageService::new();

    println!("Symptom triage demo ({})", Local::now().date_naive());

    for (name, submission) in demo_scenarios() {
        if let Some(filter) = &args.scenario {
            if !name.contains(filter.as_str()) {
                continue;
            }
        }

        println!("\nScenario: {name}");
        match service.triage(submission) {
            Ok(outcome) => render_outcome(&outcome),
            Err(err) => println!("  Submission rejected: {err}"),
        }
    }

    Ok(())
}

fn render_outcome(outcome: &TriageOutcome) {
    println!("  Resolved by: {}", outcome.path.label());
    let triggered = outcome.path.triggered_red_flags();
    if !triggered.is_empty() {
        println!("  Red flags: {}", triggered.join(", "));
    }
    println!("  Urgency: {}", outcome.result.urgency.label());
    println!("  Likely etiology:");
    for etiology in &outcome.result.likely_etiology {
        println!("    - {etiology}");
    }
    println!("  Recommendations:");
    for recommendation in &outcome.result.recommendations {
        println!("    - {recommendation}");
    }
    if !outcome.result.tests_to_consider.is_empty() {
        println!("  Tests to consider:");
        for test in &outcome.result.tests_to_consider {
            println!("    - {test}");
        }
    }
    if !outcome.result.specialty_consult.is_empty() {
        println!(
            "  Specialty consult: {}",
            outcome.result.specialty_consult.join(", ")
        );
    }
    println!("  Warning: {}", outcome.result.warning);
}

fn baseline(age: u8) -> HeadacheSubmission {
    HeadacheSubmission {
        location: PainLocation::Diffuse,
        quality: PainQuality::Aching,
        severity: 5,
        duration: "6 hours".to_string(),
        onset: Onset::Gradual,
        frequency: Frequency::Episodic,
        symptoms: AssociatedSymptoms::default(),
        aura: false,
        aura_description: None,
        relieving_factors: Vec::new(),
        exacerbating_factors: Vec::new(),
        risk_factors: RiskFactors {
            age,
            ..RiskFactors::default()
        },
    }
}

fn demo_scenarios() -> Vec<(&'static str, HeadacheSubmission)> {
    let thunderclap = HeadacheSubmission {
        quality: PainQuality::Explosive,
        severity: 10,
        duration: "1 hour".to_string(),
        onset: Onset::Thunderclap,
        frequency: Frequency::Single,
        ..baseline(42)
    };

    let arteritis = HeadacheSubmission {
        location: PainLocation::Temporal,
        severity: 6,
        duration: "days".to_string(),
        symptoms: AssociatedSymptoms {
            scalp_tenderness: true,
            jaw_claudication: true,
            ..AssociatedSymptoms::default()
        },
        ..baseline(68)
    };

    let migraine = HeadacheSubmission {
        location: PainLocation::Unilateral,
        quality: PainQuality::Throbbing,
        severity: 7,
        duration: "12 hours".to_string(),
        symptoms: AssociatedSymptoms {
            nausea: true,
            photophobia: true,
            phonophobia: true,
            ..AssociatedSymptoms::default()
        },
        ..baseline(29)
    };

    let tension = HeadacheSubmission {
        location: PainLocation::Bilateral,
        quality: PainQuality::Pressure,
        severity: 4,
        duration: "all day".to_string(),
        ..baseline(35)
    };

    let cluster = HeadacheSubmission {
        location: PainLocation::Periorbital,
        quality: PainQuality::Stabbing,
        severity: 9,
        duration: "45 min".to_string(),
        onset: Onset::WakingFromSleep,
        symptoms: AssociatedSymptoms {
            lacrimation: true,
            nasal_congestion: true,
            ..AssociatedSymptoms::default()
        },
        ..baseline(41)
    };

    let undifferentiated = HeadacheSubmission {
        severity: 7,
        ..baseline(30)
    };

    vec![
        ("thunderclap onset", thunderclap),
        ("suspected giant cell arteritis", arteritis),
        ("migraine without aura", migraine),
        ("tension-type", tension),
        ("cluster attack", cluster),
        ("undifferentiated", undifferentiated),
    ]
}
