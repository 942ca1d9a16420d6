use order_sample::{run_demo, Transcript};

#[test]
fn test_driver_transcript() {
    let transcript = Transcript::new();
    let total = run_demo(&transcript).expect("demo should succeed");

    assert!((total - 2035.0).abs() < 1e-9);
    assert_eq!(
        transcript.lines(),
        vec![
            "Order created: Order ID: 1, Amount: 500, Status: created",
            "Order created: Order ID: 2, Amount: 1500, Status: created",
            "Order updated: Order ID: 1, Amount: 500, Status: processing",
            "Order completed: Order ID: 2, Amount: 1500, Status: completed",
            "Total price: 2035",
        ]
    );
}

#[test]
fn test_driver_transcript_is_stable_across_runs() {
    let first = Transcript::new();
    let second = Transcript::new();
    run_demo(&first).unwrap();
    run_demo(&second).unwrap();
    assert_eq!(first.lines(), second.lines());
}
