use chrono::Local;
use clap::Args;
use offer_costing::config::AppConfig;
use offer_costing::error::AppError;
use offer_costing::workflows::quote::{
    BenefitsForm, CompensationForm, MarginForm, ProfileForm, QuoteService, QuoteSummaryView,
};

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteDemoArgs {
    /// Monthly gross salary for the sample candidate
    #[arg(long, default_value = "3500")]
    pub(crate) gross: String,
    /// Manually supplied monthly net salary (omitted: net base stays €0)
    #[arg(long)]
    pub(crate) net: Option<String>,
    /// Margin package: standard, payrolling or manual
    #[arg(long, default_value = "standard")]
    pub(crate) margin: String,
    /// Yearly margin amount when --margin manual is selected
    #[arg(long)]
    pub(crate) manual_margin: Option<String>,
    /// Skip the extra-benefits sample and quote salary plus defaults only
    #[arg(long)]
    pub(crate) bare: bool,
}

/// Walk all five phases for a hybrid sample candidate and print the Phase 5
/// output the way the offer sheet lays it out.
pub(crate) fn run_quote_demo(args: QuoteDemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = QuoteService::new(config.benefits);
    let mut sequencer = service.sequencer();

    sequencer.submit_profile(&ProfileForm {
        experience: "3-5".to_string(),
        work_model: "Hybrid".to_string(),
        hybrid_onsite_days: "2".to_string(),
        position: "Technical".to_string(),
        nationality: "Belgian".to_string(),
    })?;

    sequencer.submit_compensation(&CompensationForm {
        monthly_salary: args.gross.clone(),
        monthly_net_salary: args.net.clone().unwrap_or_default(),
        mobility_budget: !args.bare,
        mobility_category: if args.bare {
            String::new()
        } else {
            "category_2".to_string()
        },
        ..CompensationForm::default()
    })?;

    let benefits = if args.bare {
        BenefitsForm::default()
    } else {
        BenefitsForm {
            pension_plan: true,
            pension_percent: "3".to_string(),
            representation: true,
            representation_amount: "150".to_string(),
            home_office_allowance: true,
            home_internet: true,
            home_internet_amount: "15".to_string(),
            phone_allowance: true,
            phone_allowance_amount: "25".to_string(),
            ..BenefitsForm::default()
        }
    };
    sequencer.submit_benefits(&benefits)?;

    let request = sequencer.submit_margin(&MarginForm {
        package: args.margin.clone(),
        manual_amount: args.manual_margin.clone().unwrap_or_default(),
    })?;

    for note in sequencer.guidance() {
        println!("Guidance: {}", note.message);
    }

    let summary = service.summarize(&request);
    render_summary(&summary);
    Ok(())
}

fn render_summary(summary: &QuoteSummaryView) {
    println!("Candidate cost quote");
    println!("Generated on {}", Local::now().date_naive());
    println!("Package: {}", summary.package);

    println!("\nCandidate offer");
    println!("- Monthly gross: €{}", summary.candidate.monthly_gross);
    println!("- Annual gross: €{}", summary.candidate.annual_gross);
    println!("- 13th month: €{}", summary.candidate.thirteenth_month);
    println!(
        "- Double holiday pay: €{}",
        summary.candidate.double_holiday_pay
    );
    if let Some(net) = summary.candidate.net_excluding_benefits {
        println!("- Net per month (excl. benefits): €{net}");
    }
    if let Some(car) = summary.candidate.company_car {
        println!("- Car + fuel card: {car}");
    }
    if let Some(budget) = summary.candidate.mobility_budget_monthly {
        println!("- Mobility budget: €{budget}/month");
    }

    if !summary.candidate.net_benefit_lines.is_empty() {
        println!("\nNet benefits per month");
        for line in &summary.candidate.net_benefit_lines {
            println!(
                "- {} [{}]: €{}/month",
                line.label, line.category_label, line.monthly
            );
        }
        println!(
            "- Subtotal: €{}/month",
            summary.candidate.net_benefits_monthly
        );
    }

    if !summary.candidate.statutory_benefits.is_empty() {
        println!("\nSelected benefits");
        for benefit in &summary.candidate.statutory_benefits {
            println!("- {}: {}", benefit.label, benefit.detail);
        }
    }

    println!(
        "\nTotal net per month: €{}",
        summary.candidate.total_net_per_month
    );

    println!("\nSales team");
    println!(
        "- Total cost per year: €{}",
        summary.employer.total_annual_cost
    );
    println!("- Margin: €{}/year", summary.employer.margin_annual);
    println!("- Daily rate (incl. margin): €{}", summary.employer.daily_rate);
}
