// Desktop-only notice support.

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub const MOBILE_NOTICE_HTML: &str =
    "<p>Not *yet* set up for mobile.</br> Please try on a desktop device.</p>";

/// True for user agents of phones and tablets we do not support.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}
