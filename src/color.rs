/// Deterministic color for a route identifier.
///
/// Hashes the route id with the classic 31x string hash in wrapping 32-bit
/// signed arithmetic, then maps the hash to an HSL hue. The hue is
/// normalized with `rem_euclid` so ids whose hash goes negative still land
/// in [0, 360).
pub fn color_for_route(route_id: &str) -> String {
    let mut hash: i32 = 0;
    for ch in route_id.chars() {
        hash = (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let hue = hash.rem_euclid(360);
    format!("hsl({hue}, 100%, 50%)")
}
