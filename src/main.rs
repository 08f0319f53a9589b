use irriplan::config::{run_options::get_args, Config};
use irriplan::planner::IrrigationPlanner;
use irriplan::service::{json_io::JsonInput, json_io::StdoutSink, PlanService};
use irriplan::time::RealTimeProvider;
use irriplan::utils::start_log;
use std::{error::Error, fs::File, io::BufReader, sync::Arc};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let Some(args) = get_args()? else {
        return Ok(());
    };
    let cfg = Config::load(&args)?;
    start_log(Some(args.log_level.as_deref().unwrap_or(&cfg.logging.level)));

    info!("Starting irriplan...");

    let planner = Arc::new(IrrigationPlanner::new(cfg.planner)?);

    let input = match &args.input {
        Some(path) => JsonInput::from_reader(BufReader::new(File::open(path)?))?,
        None => JsonInput::from_reader(std::io::stdin().lock())?,
    };
    let device_id = input.device_id().unwrap_or(&cfg.service.device_id).to_owned();
    let input = Arc::new(input);

    let service = PlanService::new(
        planner,
        input.clone(),
        input,
        Arc::new(StdoutSink),
        Arc::new(RealTimeProvider),
        cfg.service.forecast_days,
    );

    let status = service.soil_status(&device_id).await?;
    info!("Device {} soil is {}", device_id, status);

    service.recompute_plan(&device_id).await?;
    Ok(())
}
