use std::sync::Arc;
use std::thread;

use tracing::info;

use hubbub::Broker;
use hubbub::config::load_config;
use hubbub::utils::logging;

fn main() {
    let config = load_config().expect("Failed to load configuration");
    logging::init(&config.log.level);

    let broker = Arc::new(Broker::new());

    // Subscribe to a topic
    let sub = broker
        .subscribe(&config.demo.topic)
        .expect("broker was just created");

    // Publish a message to the topic from another thread
    let publisher = {
        let broker = Arc::clone(&broker);
        let topic = config.demo.topic.clone();
        let payload = config.demo.payload.clone();
        thread::spawn(move || broker.publish(&topic, &payload))
    };

    // Print the message
    if let Some(msg) = sub.recv() {
        match serde_json::to_string(&msg) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize message: {e}"),
        }
    }
    publisher.join().expect("publisher thread panicked");

    // Close the broker
    let shutdown = broker.shutdown_signal();
    broker.close();
    shutdown.wait();
    info!("Demo finished, broker shut down");
}
