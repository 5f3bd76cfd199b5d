use super::*;

fn request() -> ContactRequest {
    ContactRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Hello, this is a test.".to_owned(),
        newsletter: false,
    }
}

#[test]
fn defaults_match_simulation_constants() {
    let backend = SimulatedBackend::seeded(1);
    assert_eq!(backend.delay(), Duration::from_millis(2000));
    assert!((backend.success_rate() - 0.8).abs() < f64::EPSILON);
}

#[test]
fn forced_success_resolves_with_success_message() {
    let backend = SimulatedBackend::seeded(7).with_success_rate(1.0);
    let outcome = futures::executor::block_on(backend.submit(&request()));
    assert_eq!(outcome, Ok(SUCCESS_MESSAGE.to_owned()));
}

#[test]
fn forced_failure_rejects_with_failure_message() {
    let backend = SimulatedBackend::seeded(7).with_success_rate(0.0);
    let outcome = futures::executor::block_on(backend.submit(&request()));
    assert_eq!(outcome, Err(FAILURE_MESSAGE.to_owned()));
}

#[test]
fn same_seed_gives_same_sequence() {
    let a = SimulatedBackend::seeded(42);
    let b = SimulatedBackend::seeded(42);
    let seq_a: Vec<_> = (0..32).map(|_| a.roll().is_ok()).collect();
    let seq_b: Vec<_> = (0..32).map(|_| b.roll().is_ok()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn default_rate_produces_both_outcomes() {
    let backend = SimulatedBackend::seeded(3);
    let wins = (0..1000).filter(|_| backend.roll().is_ok()).count();
    assert!((700..=900).contains(&wins), "wins = {wins}");
}

#[test]
fn success_rate_is_clamped() {
    assert_eq!(SimulatedBackend::seeded(0).with_success_rate(3.0).success_rate(), 1.0);
    assert_eq!(SimulatedBackend::seeded(0).with_success_rate(-1.0).success_rate(), 0.0);
    assert_eq!(SimulatedBackend::seeded(0).with_success_rate(f64::NAN).success_rate(), 0.0);
}

#[test]
fn clones_share_one_rng_stream() {
    let a = SimulatedBackend::seeded(99);
    let b = a.clone();
    let fresh = SimulatedBackend::seeded(99);
    let interleaved: Vec<_> = (0..16)
        .map(|i| if i % 2 == 0 { a.roll().is_ok() } else { b.roll().is_ok() })
        .collect();
    let straight: Vec<_> = (0..16).map(|_| fresh.roll().is_ok()).collect();
    assert_eq!(interleaved, straight);
}
