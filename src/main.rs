//! Demo binary for notify-bus.
//!
//! Wires one explicitly constructed `EventBus` into producers and consumers,
//! then drives a single order through the flow: constructor injection for
//! the notifier, lifecycle hooks around the run, publish/subscribe for the
//! completion event.

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use log::debug;
use log::info;

use notify_bus::config::Config;
use notify_bus::event::EventBus;
use notify_bus::logging::setup_logging;
use notify_bus::publisher::Publisher;
use notify_bus::runner::Runner;
use notify_bus::service::order_service::EmailNotifier;
use notify_bus::service::order_service::ORDER_PLACED;
use notify_bus::service::order_service::OrderPlaced;
use notify_bus::service::order_service::OrderService;
use notify_bus::subscriber::log_subscriber::LogSubscriber;

struct DemoApp {
    service: OrderService,
}

impl Runner for DemoApp {
    fn before_run(&mut self) {
        info!("Preparing the application.");
    }

    fn after_run(&mut self) {
        info!("Cleaning up the application.");
    }

    fn execute(&mut self) -> Result<()> {
        self.service.process_order("ABC123")?;
        Ok(())
    }
}

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::new();
    setup_logging(&config)?;
    info!("Starting notify-bus demo...");

    let event_bus = Arc::new(EventBus::new());
    setup_subscribers(&event_bus)?;
    let service = setup_order_service(event_bus);

    let mut app = DemoApp { service };
    app.run()?;

    info!("Done.");
    Ok(())
}

fn setup_subscribers(event_bus: &Arc<EventBus>) -> Result<()> {
    debug!("Setting up Subscribers...");

    let audit = Arc::new(LogSubscriber::new("audit"));
    event_bus.register_subscriber(ORDER_PLACED, audit)?;

    event_bus.subscribe(ORDER_PLACED, |_, payload| {
        if let Some(order) = payload.get::<OrderPlaced>() {
            info!("Order {} placed at {}.", order.order_id, order.placed_at);
        }
        Ok(())
    })?;

    Ok(())
}

fn setup_order_service(event_bus: Arc<EventBus>) -> OrderService {
    debug!("Setting up OrderService...");

    let notifier = Arc::new(EmailNotifier::new());
    let publisher = Publisher::new(event_bus, ORDER_PLACED);
    OrderService::new(notifier, publisher)
}
