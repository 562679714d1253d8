//! Integration test for the order flow: injected notifier, lifecycle hooks,
//! and the `order_placed` event reaching a subscriber.

use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use notify_bus::event::EventBus;
use notify_bus::publisher::Publisher;
use notify_bus::runner::Runner;
use notify_bus::service::order_service::Notifier;
use notify_bus::service::order_service::ORDER_PLACED;
use notify_bus::service::order_service::OrderPlaced;
use notify_bus::service::order_service::OrderService;
use notify_bus::subscriber::log_subscriber::LogSubscriber;

mockall::mock! {
    EmailGateway {}

    impl Notifier for EmailGateway {
        fn send(&self, message: &str) -> Result<()>;
    }
}

#[test]
fn test_order_flow_notifies_and_publishes() {
    let event_bus = Arc::new(EventBus::new());

    // Capture the published event
    let placed: Arc<Mutex<Vec<OrderPlaced>>> = Arc::new(Mutex::new(Vec::new()));
    let placed_clone = placed.clone();
    event_bus
        .subscribe(ORDER_PLACED, move |_, payload| {
            let event = payload
                .get::<OrderPlaced>()
                .ok_or_else(|| anyhow::anyhow!("unexpected payload type"))?;
            placed_clone.lock().unwrap().push(event.clone());
            Ok(())
        })
        .unwrap();

    let audit = Arc::new(LogSubscriber::new("audit"));
    event_bus
        .register_subscriber(ORDER_PLACED, audit.clone())
        .unwrap();

    // Mocked notifier injected through the constructor
    let mut gateway = MockEmailGateway::new();
    gateway
        .expect_send()
        .withf(|message: &str| message == "Order ABC123 processed")
        .times(1)
        .returning(|_| Ok(()));

    let service = OrderService::new(
        Arc::new(gateway),
        Publisher::new(event_bus, ORDER_PLACED),
    );

    service.process_order("ABC123").expect("order should process");

    let placed = placed.lock().unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].order_id, "ABC123");
    assert_eq!(audit.delivered(), 1);
}

#[test]
fn test_notifier_failure_surfaces_before_publish() {
    let event_bus = Arc::new(EventBus::new());
    let delivered = Arc::new(LogSubscriber::new("audit"));
    event_bus
        .register_subscriber(ORDER_PLACED, delivered.clone())
        .unwrap();

    let mut gateway = MockEmailGateway::new();
    gateway
        .expect_send()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("smtp down")));

    let service = OrderService::new(
        Arc::new(gateway),
        Publisher::new(event_bus, ORDER_PLACED),
    );

    assert!(service.process_order("XYZ789").is_err());
    assert_eq!(delivered.delivered(), 0, "event must not fire when notify fails");
}

#[test]
fn test_run_wraps_order_processing_with_hooks() {
    struct App {
        service: OrderService,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Runner for App {
        fn before_run(&mut self) {
            self.calls.lock().unwrap().push("before");
        }

        fn after_run(&mut self) {
            self.calls.lock().unwrap().push("after");
        }

        fn execute(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("execute");
            self.service.process_order("ABC123")
        }
    }

    let event_bus = Arc::new(EventBus::new());
    let calls = Arc::new(Mutex::new(Vec::new()));

    let calls_clone = calls.clone();
    event_bus
        .subscribe(ORDER_PLACED, move |_, _| {
            calls_clone.lock().unwrap().push("event");
            Ok(())
        })
        .unwrap();

    let mut gateway = MockEmailGateway::new();
    gateway.expect_send().times(1).returning(|_| Ok(()));

    let mut app = App {
        service: OrderService::new(
            Arc::new(gateway),
            Publisher::new(event_bus, ORDER_PLACED),
        ),
        calls: calls.clone(),
    };

    app.run().unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["before", "execute", "event", "after"]
    );
}
