use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use futures_util::future::join_all;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crpt_client::analytics::stats::Stats;
use crpt_client::client::{AcquireMode, CrptClient};
use crpt_client::config::Config;
use crpt_client::error::Result;
use crpt_client::limiter::{PermitPool, Replenisher};
use crpt_client::model::{Description, Document, DocumentType, Product, ProductionType};
use crpt_client::transport::HttpTransport;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Starting CRPT document submission demo...");
    info!(
        "Rate limit: {} submissions per {}ms window, endpoint: {}",
        config.request_limit, config.window_ms, config.api_url
    );

    let pool = PermitPool::new(config.request_limit);
    let replenisher = Replenisher::spawn(pool.clone(), config.window());
    let transport = Arc::new(HttpTransport::from_config(&config)?);
    let acquire_mode = config
        .acquire_timeout()
        .map_or(AcquireMode::Probe, AcquireMode::Wait);
    let client = Arc::new(CrptClient::new(pool, transport, acquire_mode));

    let stats = Arc::new(Stats::new());
    let started = Instant::now();

    let burst = (0..config.demo_requests).map(|n| {
        let client = client.clone();
        let stats = stats.clone();
        async move {
            let document = sample_document();
            let submit_started = Instant::now();
            let outcome = client.create_document(&document, "12345").await;
            stats.update_submit_latency(submit_started.elapsed().as_millis() as u64);
            match &outcome {
                Ok(submission) => info!("Submission {} -> {:?}", n, submission),
                Err(e) => error!("Submission {} failed: {}", n, e),
            }
            stats.record(&outcome);
        }
    });
    join_all(burst).await;

    info!("Demo burst finished in {}ms", started.elapsed().as_millis());
    stats.log_stats();

    replenisher.shutdown().await;
    Ok(())
}

fn sample_document() -> Document {
    let products = vec![
        Product {
            certificate_document: "12345".into(),
            certificate_document_date: demo_date(2025, 1, 1),
            certificate_document_number: "12345".into(),
            owner_inn: "0101010101".into(),
            producer_inn: "1010101010".into(),
            production_date: demo_date(2024, 1, 1),
            tnved_code: "0101010101".into(),
            uit_code: Some("0101010101".into()),
            uitu_code: None,
        },
        Product {
            certificate_document: "67890".into(),
            certificate_document_date: demo_date(2025, 2, 1),
            certificate_document_number: "67890".into(),
            owner_inn: "0202020202".into(),
            producer_inn: "2020202020".into(),
            production_date: demo_date(2024, 2, 1),
            tnved_code: "0101010101".into(),
            uit_code: Some("0202020202".into()),
            uitu_code: None,
        },
    ];

    Document {
        description: Description {
            participant_inn: "1111111111".into(),
        },
        doc_id: "123".into(),
        doc_status: "DRAFT".into(),
        doc_type: DocumentType::LpIntroduceGoods,
        import_request: false,
        owner_inn: "2222222222".into(),
        participant_inn: "1111111111".into(),
        producer_inn: "3333333333".into(),
        production_date: demo_date(2025, 3, 1),
        production_type: ProductionType::OwnProduction,
        products,
        reg_date: demo_date(2025, 3, 30),
        reg_number: "123456".into(),
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}
