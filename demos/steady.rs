//! Two long-lived runnables under supervision; Ctrl-C stops and drains.
//!
//! ```bash
//! cargo run --example steady --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use runhost::{
    Config, FnDescriptor, Host, LogWriter, RunnableError, RunnableFn, StaticRegistry, Subscribe,
    Supervisor,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ticker = FnDescriptor::arc("ticker", || {
        Ok(Box::new(RunnableFn::new(|ctx: CancellationToken| async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(Duration::from_millis(500)) => {
                        println!("tick");
                    }
                    _ = ctx.cancelled() => return Err(RunnableError::Canceled),
                }
            }
        })) as _)
    });

    // Completes every two seconds; the runtime restarts it after the 1s idle
    // backoff, forever.
    let batch = FnDescriptor::arc("batch", || {
        Ok(Box::new(RunnableFn::new(|_ctx: CancellationToken| async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            println!("batch done");
            Ok(())
        })) as _)
    });

    let registry = Arc::new(StaticRegistry::new(vec![ticker, batch]));
    let subscribers: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let supervisor = Supervisor::builder(Config::default(), registry)
        .with_subscribers(subscribers)
        .build();

    let host = Host::new(supervisor);
    host.start(&CancellationToken::new()).await?;

    tokio::signal::ctrl_c().await?;
    println!("shutting down...");
    host.stop().await?;
    Ok(())
}
