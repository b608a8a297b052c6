//! A crashing runnable: watch the failure notifications and the 2s backoff.
//!
//! ```bash
//! cargo run --example restart_on_failure --features logging
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use runhost::{
    Config, FnDescriptor, Host, LogWriter, RunnableError, RunnableFn, StaticRegistry, Subscribe,
    Supervisor,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let crashes = Arc::new(AtomicU32::new(0));

    let flaky = {
        let crashes = Arc::clone(&crashes);
        FnDescriptor::arc("flaky", move || {
            let crashes = Arc::clone(&crashes);
            Ok(Box::new(RunnableFn::new(move |_ctx: CancellationToken| {
                let n = crashes.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    if n % 3 == 0 {
                        // Every third attempt survives a while before
                        // completing normally.
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        return Ok(());
                    }
                    Err(RunnableError::fail(format!("crash #{n}")))
                }
            })) as _)
        })
    };

    let registry = Arc::new(StaticRegistry::new(vec![flaky]));
    let subscribers: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let supervisor = Supervisor::builder(Config::default(), registry)
        .with_subscribers(subscribers)
        .build();

    let host = Host::new(supervisor);
    host.start(&CancellationToken::new()).await?;

    tokio::signal::ctrl_c().await?;
    host.stop().await?;
    println!("total attempts: {}", crashes.load(Ordering::SeqCst));
    Ok(())
}
