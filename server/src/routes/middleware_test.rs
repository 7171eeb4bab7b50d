use axum::http::HeaderValue;

use super::*;

fn peer() -> Option<SocketAddr> {
    Some("192.168.1.7:51234".parse().unwrap())
}

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn forwarded_for_takes_first_hop() {
    let h = headers(&[("x-forwarded-for", " 203.0.113.5 , 10.0.0.1"), ("x-real-ip", "198.51.100.2")]);
    assert_eq!(client_ip(&h, peer()), "203.0.113.5");
}

#[test]
fn real_ip_used_without_forwarded_for() {
    let h = headers(&[("x-real-ip", "198.51.100.2")]);
    assert_eq!(client_ip(&h, peer()), "198.51.100.2");
}

#[test]
fn blank_headers_fall_through_to_peer() {
    let h = headers(&[("x-forwarded-for", "  "), ("x-real-ip", "")]);
    assert_eq!(client_ip(&h, peer()), "192.168.1.7");
}

#[test]
fn peer_address_drops_port() {
    assert_eq!(client_ip(&HeaderMap::new(), peer()), "192.168.1.7");
}

#[test]
fn unknown_without_any_source() {
    assert_eq!(client_ip(&HeaderMap::new(), None), "unknown");
}
