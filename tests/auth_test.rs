//! Password hashing and login rate limiter tests.

use std::net::{IpAddr, Ipv4Addr};

use podium::auth::password;
use podium::auth::rate_limit::RateLimiter;

#[test]
fn password_hash_round_trips() {
    let hash = password::hash_password("correct horse battery").expect("hash");
    assert_ne!(hash, "correct horse battery");
    assert!(password::verify_password("correct horse battery", &hash).expect("verify"));
    assert!(!password::verify_password("wrong horse", &hash).expect("verify"));
}

#[test]
fn verify_rejects_malformed_hashes() {
    assert!(password::verify_password("anything", "not-a-phc-string").is_err());
}

#[test]
fn limiter_blocks_after_five_failures() {
    let limiter = RateLimiter::new();
    let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

    for _ in 0..4 {
        limiter.record_failure(ip);
        assert!(!limiter.is_blocked(ip));
    }
    limiter.record_failure(ip);
    assert!(limiter.is_blocked(ip));
}

#[test]
fn limiter_clear_resets_an_ip() {
    let limiter = RateLimiter::new();
    let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));

    for _ in 0..5 {
        limiter.record_failure(ip);
    }
    assert!(limiter.is_blocked(ip));
    limiter.clear(ip);
    assert!(!limiter.is_blocked(ip));
}

#[test]
fn limiter_tracks_ips_independently() {
    let limiter = RateLimiter::new();
    let blocked = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 3));
    let clean = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 4));

    for _ in 0..5 {
        limiter.record_failure(blocked);
    }
    assert!(limiter.is_blocked(blocked));
    assert!(!limiter.is_blocked(clean));
}
