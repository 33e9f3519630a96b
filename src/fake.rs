//! A randomized [`ValueProvider`] with faker-style namespaces.
//!
//! Date methods return RFC 3339 timestamps; the resolver decides which of
//! them are reduced to plain dates.

use crate::provider::{ProviderError, ValueProvider};
use crate::words;
use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use std::cell::RefCell;

/// Largest integer every JSON consumer can represent exactly (2^53 - 1).
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

const NANOID_ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";
const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";
/// Slack for float error when snapping amount bounds to whole cents.
const CENT_EPSILON: f64 = 1e-9;

const DIGITS: &[u8] = b"0123456789";
const HEX: &[u8] = b"0123456789abcdef";

/// Every `(namespace, methods)` pair the provider answers.
const METHODS: &[(&str, &[&str])] = &[
    (
        "person",
        &["firstName", "lastName", "middleName", "fullName", "jobTitle", "prefix", "sex"],
    ),
    (
        "internet",
        &[
            "email",
            "username",
            "userName",
            "domainWord",
            "domainName",
            "domainSuffix",
            "url",
            "ip",
            "ipv4",
            "ipv6",
            "mac",
            "port",
            "password",
        ],
    ),
    ("number", &["int", "float"]),
    ("string", &["uuid", "nanoid", "alpha", "alphanumeric", "numeric"]),
    ("datatype", &["boolean"]),
    (
        "commerce",
        &[
            "price",
            "productName",
            "product",
            "productAdjective",
            "productMaterial",
            "department",
            "productDescription",
        ],
    ),
    (
        "location",
        &[
            "streetAddress",
            "street",
            "buildingNumber",
            "city",
            "state",
            "zipCode",
            "country",
            "countryCode",
            "latitude",
            "longitude",
        ],
    ),
    (
        "date",
        &["recent", "soon", "past", "future", "birthdate", "anytime", "month", "weekday"],
    ),
    ("lorem", &["word", "words", "sentence", "paragraph", "slug"]),
    ("phone", &["number"]),
    ("company", &["name", "catchPhrase"]),
    ("color", &["human", "rgb"]),
    ("finance", &["amount", "accountNumber", "currencyCode"]),
];

/// Randomized provider backed by a seedable RNG.
///
/// Not thread-safe: the RNG sits behind a `RefCell`, matching the
/// single-threaded expansion model.
pub struct FakeProvider {
    rng: RefCell<StdRng>,
}

impl FakeProvider {
    /// A provider seeded from system entropy.
    pub fn new() -> Self {
        FakeProvider {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// A provider with reproducible output.
    pub fn seeded(seed: u64) -> Self {
        FakeProvider {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// All supported `(namespace, method)` pairs.
    pub fn methods() -> impl Iterator<Item = (&'static str, &'static str)> {
        METHODS
            .iter()
            .flat_map(|(ns, methods)| methods.iter().map(move |m| (*ns, *m)))
    }

    // ── Primitives ──────────────────────────────────────────────────

    fn pick<T: Copy>(&self, items: &[T]) -> T {
        let idx = self.rng.borrow_mut().gen_range(0..items.len());
        items[idx]
    }

    fn int_in(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn float_in(&self, min: f64, max: f64) -> f64 {
        if min == max {
            return min;
        }
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn chars_from(&self, alphabet: &[u8], len: usize) -> String {
        let mut rng = self.rng.borrow_mut();
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    /// A v4 UUID drawn from the provider's RNG, so seeding covers it too.
    fn uuid(&self) -> String {
        let bytes: [u8; 16] = self.rng.borrow_mut().gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    fn coin(&self) -> bool {
        self.rng.borrow_mut().gen_bool(0.5)
    }

    // ── person / internet ───────────────────────────────────────────

    fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.pick(words::FIRST_NAMES),
            self.pick(words::LAST_NAMES)
        )
    }

    fn username(&self) -> String {
        let first = self.pick(words::FIRST_NAMES);
        let last = alnum(self.pick(words::LAST_NAMES));
        match self.int_in(0, 2) {
            0 => format!("{}{}", first, self.int_in(1, 99)),
            1 => format!("{}.{}", first, last),
            _ => format!("{}_{}{}", first, last, self.int_in(1, 99)),
        }
    }

    fn email(&self) -> String {
        let first = alnum(self.pick(words::FIRST_NAMES)).to_lowercase();
        let last = alnum(self.pick(words::LAST_NAMES)).to_lowercase();
        format!(
            "{}.{}{}@{}",
            first,
            last,
            self.int_in(1, 99),
            self.pick(words::FREE_EMAIL_DOMAINS)
        )
    }

    fn domain_word(&self) -> String {
        format!(
            "{}-{}",
            self.pick(words::PRODUCT_ADJECTIVES).to_lowercase(),
            self.pick(words::PRODUCTS).to_lowercase()
        )
    }

    fn domain_name(&self) -> String {
        format!("{}.{}", self.domain_word(), self.pick(words::DOMAIN_SUFFIXES))
    }

    fn ipv4(&self) -> String {
        let octets: Vec<String> = (0..4).map(|_| self.int_in(0, 255).to_string()).collect();
        octets.join(".")
    }

    fn ipv6(&self) -> String {
        let groups: Vec<String> = (0..8).map(|_| self.chars_from(HEX, 4)).collect();
        groups.join(":")
    }

    fn mac(&self) -> String {
        let pairs: Vec<String> = (0..6).map(|_| self.chars_from(HEX, 2)).collect();
        pairs.join(":")
    }

    // ── number / commerce / finance ─────────────────────────────────

    fn int(&self, args: &[Value]) -> Result<Value, ProviderError> {
        let (min, max) = match args.first() {
            None => (0.0, MAX_SAFE_INTEGER as f64),
            Some(Value::Object(opts)) => (
                bound(opts, "min", 0.0),
                bound(opts, "max", MAX_SAFE_INTEGER as f64),
            ),
            Some(Value::Number(max)) => (0.0, max.as_f64().unwrap_or(0.0)),
            Some(other) => return Err(invalid(format!("expected options, got {}", other))),
        };
        let (lo, hi) = (min.ceil(), max.floor());
        if lo > hi {
            return Err(invalid(format!(
                "no integer between min {} and max {}",
                min, max
            )));
        }
        Ok(Value::from(self.int_in(lo as i64, hi as i64)))
    }

    fn float(&self, args: &[Value]) -> Result<Value, ProviderError> {
        let (min, max) = self.float_range(args, 0.0, 1.0)?;
        let value = round_to(self.float_in(min, max), 2).clamp(min, max);
        Ok(serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null))
    }

    /// Two-decimal amount as a string, the way prices are usually written.
    /// Bounds snap inward to whole cents so the printed value stays in range.
    fn amount(&self, args: &[Value], default_min: f64) -> Result<Value, ProviderError> {
        let (min, max) = self.float_range(args, default_min, 1000.0)?;
        let lo = (min * 100.0 - CENT_EPSILON).ceil() / 100.0;
        let hi = (max * 100.0 + CENT_EPSILON).floor() / 100.0;
        if lo > hi {
            return Err(invalid(format!(
                "no two-decimal amount between min {} and max {}",
                min, max
            )));
        }
        let value = round_to(self.float_in(lo, hi), 2).clamp(lo, hi);
        Ok(Value::String(format!("{:.2}", value)))
    }

    fn float_range(
        &self,
        args: &[Value],
        default_min: f64,
        default_max: f64,
    ) -> Result<(f64, f64), ProviderError> {
        let (min, max) = match options(args)? {
            Some(opts) => (bound(opts, "min", default_min), bound(opts, "max", default_max)),
            None => (default_min, default_max),
        };
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(invalid(format!("range {}..{} is too wide", min, max)));
        }
        if min > max {
            return Err(invalid(format!("max {} is less than min {}", max, min)));
        }
        Ok((min, max))
    }

    // ── location ────────────────────────────────────────────────────

    fn coordinate(&self, args: &[Value], limit: f64) -> Result<Value, ProviderError> {
        let (min, max) = self.float_range(args, -limit, limit)?;
        let value = round_to(self.float_in(min, max), 4).clamp(min, max);
        Ok(serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null))
    }

    fn state(&self, args: &[Value]) -> Result<Value, ProviderError> {
        let abbreviated = options(args)?
            .and_then(|opts| opts.get("abbreviated"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let (name, abbr) = self.pick(words::STATES);
        Ok(Value::from(if abbreviated { abbr } else { name }))
    }

    // ── date ────────────────────────────────────────────────────────

    /// A timestamp up to `days` away from now, forward or backward.
    fn relative_date(
        &self,
        args: &[Value],
        default_days: f64,
        forward: bool,
    ) -> Result<Value, ProviderError> {
        let days = match args.first() {
            None => default_days,
            Some(Value::Object(opts)) => bound(opts, "days", default_days),
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default_days),
            Some(other) => return Err(invalid(format!("expected options, got {}", other))),
        };
        if days <= 0.0 {
            return Err(invalid(format!("days must be positive, got {}", days)));
        }
        let span = (days * 86_400.0) as i64;
        let offset = Duration::try_seconds(self.int_in(1, span.max(1)))
            .ok_or_else(|| invalid(format!("{} days is out of range", days)))?;
        let now = Utc::now();
        let when = if forward {
            now.checked_add_signed(offset)
        } else {
            now.checked_sub_signed(offset)
        };
        when.map(timestamp)
            .ok_or_else(|| invalid(format!("{} days is out of range", days)))
    }

    fn birthdate(&self, args: &[Value]) -> Result<Value, ProviderError> {
        let opts = options(args)?;
        let mode = opts
            .and_then(|o| o.get("mode"))
            .and_then(Value::as_str)
            .unwrap_or("age");
        let now = Utc::now();

        match mode {
            "age" => {
                let min = opts.map_or(18.0, |o| bound(o, "min", 18.0)) as i64;
                let max = opts.map_or(80.0, |o| bound(o, "max", 80.0)) as i64;
                if min < 0 || min > max {
                    return Err(invalid(format!("invalid age range {}..{}", min, max)));
                }
                let age = self.int_in(min, max);
                let extra = age / 4 + self.int_in(0, 364);
                age.checked_mul(365)
                    .and_then(|days| days.checked_add(extra))
                    .and_then(Duration::try_days)
                    .and_then(|offset| now.checked_sub_signed(offset))
                    .map(timestamp)
                    .ok_or_else(|| invalid(format!("age {} is out of range", age)))
            }
            "year" => {
                let min = opts.map_or(1950.0, |o| bound(o, "min", 1950.0)) as i32;
                let max = opts.map_or(2005.0, |o| bound(o, "max", 2005.0)) as i32;
                if min > max {
                    return Err(invalid(format!("invalid year range {}..{}", min, max)));
                }
                let year = self.int_in(min as i64, max as i64) as i32;
                let ordinal = self.int_in(1, 365) as u32;
                let date = NaiveDate::from_yo_opt(year, ordinal)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .ok_or_else(|| invalid(format!("year {} out of range", year)))?;
                Ok(timestamp(Utc.from_utc_datetime(&date)))
            }
            other => Err(invalid(format!("unknown birthdate mode {}", other))),
        }
    }

    // ── lorem / company ─────────────────────────────────────────────

    fn words(&self, count: usize) -> String {
        let picked: Vec<&str> = (0..count).map(|_| self.pick(words::LOREM)).collect();
        picked.join(" ")
    }

    fn sentence(&self, count: Option<usize>) -> String {
        let count = count.unwrap_or_else(|| self.int_in(3, 10) as usize).max(1);
        let mut sentence = capitalize(&self.words(count));
        sentence.push('.');
        sentence
    }

    fn paragraph(&self, count: usize) -> String {
        let sentences: Vec<String> = (0..count).map(|_| self.sentence(None)).collect();
        sentences.join(" ")
    }

    fn company_name(&self) -> String {
        if self.coin() {
            format!(
                "{} {}",
                self.pick(words::LAST_NAMES),
                self.pick(words::COMPANY_SUFFIXES)
            )
        } else {
            format!(
                "{}-{}",
                self.pick(words::LAST_NAMES),
                self.pick(words::LAST_NAMES)
            )
        }
    }

    fn dispatch(
        &self,
        namespace: &str,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ProviderError> {
        let value = match (namespace, method) {
            ("person", "firstName") | ("person", "middleName") => {
                Value::from(self.pick(words::FIRST_NAMES))
            }
            ("person", "lastName") => Value::from(self.pick(words::LAST_NAMES)),
            ("person", "fullName") => Value::from(self.full_name()),
            ("person", "jobTitle") => Value::from(self.pick(words::JOB_TITLES)),
            ("person", "prefix") => Value::from(self.pick(words::PREFIXES)),
            ("person", "sex") => Value::from(self.pick(words::SEXES)),

            ("internet", "email") => Value::from(self.email()),
            ("internet", "username") | ("internet", "userName") => Value::from(self.username()),
            ("internet", "domainWord") => Value::from(self.domain_word()),
            ("internet", "domainName") => Value::from(self.domain_name()),
            ("internet", "domainSuffix") => Value::from(self.pick(words::DOMAIN_SUFFIXES)),
            ("internet", "url") => Value::from(format!("https://{}", self.domain_name())),
            ("internet", "ip") | ("internet", "ipv4") => Value::from(self.ipv4()),
            ("internet", "ipv6") => Value::from(self.ipv6()),
            ("internet", "mac") => Value::from(self.mac()),
            ("internet", "port") => Value::from(self.int_in(0, 65_535)),
            ("internet", "password") => {
                Value::from(self.chars_from(PASSWORD_CHARS, length(args, 15)?))
            }

            ("number", "int") => self.int(args)?,
            ("number", "float") => self.float(args)?,

            ("string", "uuid") => Value::from(self.uuid()),
            ("string", "nanoid") => Value::from(self.chars_from(NANOID_ALPHABET, length(args, 21)?)),
            ("string", "alpha") => Value::from(self.chars_from(ALPHA, length(args, 1)?)),
            ("string", "alphanumeric") => {
                Value::from(self.chars_from(ALPHANUMERIC, length(args, 1)?))
            }
            ("string", "numeric") => Value::from(self.chars_from(DIGITS, length(args, 1)?)),

            ("datatype", "boolean") => Value::Bool(self.coin()),

            ("commerce", "price") => self.amount(args, 1.0)?,
            ("commerce", "productName") => Value::from(format!(
                "{} {} {}",
                self.pick(words::PRODUCT_ADJECTIVES),
                self.pick(words::PRODUCT_MATERIALS),
                self.pick(words::PRODUCTS)
            )),
            ("commerce", "product") => Value::from(self.pick(words::PRODUCTS)),
            ("commerce", "productAdjective") => Value::from(self.pick(words::PRODUCT_ADJECTIVES)),
            ("commerce", "productMaterial") => Value::from(self.pick(words::PRODUCT_MATERIALS)),
            ("commerce", "department") => Value::from(self.pick(words::DEPARTMENTS)),
            ("commerce", "productDescription") => Value::from(format!(
                "The {} {} {} combines {} design with {} comfort.",
                self.pick(words::PRODUCT_ADJECTIVES),
                self.pick(words::PRODUCT_MATERIALS),
                self.pick(words::PRODUCTS),
                self.pick(words::PRODUCT_ADJECTIVES).to_lowercase(),
                self.pick(words::PRODUCT_ADJECTIVES).to_lowercase()
            )),

            ("location", "streetAddress") => Value::from(format!(
                "{} {} {}",
                self.int_in(1, 9999),
                self.pick(words::STREET_NAMES),
                self.pick(words::STREET_SUFFIXES)
            )),
            ("location", "street") => Value::from(format!(
                "{} {}",
                self.pick(words::STREET_NAMES),
                self.pick(words::STREET_SUFFIXES)
            )),
            ("location", "buildingNumber") => Value::from(self.int_in(1, 9999).to_string()),
            ("location", "city") => Value::from(self.pick(words::CITIES)),
            ("location", "state") => self.state(args)?,
            ("location", "zipCode") => Value::from(self.chars_from(DIGITS, 5)),
            ("location", "country") => Value::from(self.pick(words::COUNTRIES).0),
            ("location", "countryCode") => Value::from(self.pick(words::COUNTRIES).1),
            ("location", "latitude") => self.coordinate(args, 90.0)?,
            ("location", "longitude") => self.coordinate(args, 180.0)?,

            ("date", "recent") => self.relative_date(args, 1.0, false)?,
            ("date", "soon") => self.relative_date(args, 1.0, true)?,
            ("date", "past") => self.relative_date(args, 365.0, false)?,
            ("date", "future") => self.relative_date(args, 365.0, true)?,
            ("date", "birthdate") => self.birthdate(args)?,
            ("date", "anytime") => {
                if self.coin() {
                    self.relative_date(&[], 365.0, true)?
                } else {
                    self.relative_date(&[], 365.0, false)?
                }
            }
            ("date", "month") => Value::from(self.pick(words::MONTHS)),
            ("date", "weekday") => Value::from(self.pick(words::WEEKDAYS)),

            ("lorem", "word") => Value::from(self.pick(words::LOREM)),
            ("lorem", "words") => Value::from(self.words(length(args, 3)?)),
            ("lorem", "sentence") => {
                let count = if args.is_empty() { None } else { Some(length(args, 0)?) };
                Value::from(self.sentence(count))
            }
            ("lorem", "paragraph") => Value::from(self.paragraph(length(args, 3)?)),
            ("lorem", "slug") => Value::from(self.words(length(args, 3)?).replace(' ', "-")),

            ("phone", "number") => Value::from(format!(
                "({}) {}-{}",
                self.chars_from(DIGITS, 3),
                self.chars_from(DIGITS, 3),
                self.chars_from(DIGITS, 4)
            )),

            ("company", "name") => Value::from(self.company_name()),
            ("company", "catchPhrase") => Value::from(format!(
                "{} {} {}",
                self.pick(words::CATCH_PHRASE_ADJECTIVES),
                self.pick(words::CATCH_PHRASE_DESCRIPTORS),
                self.pick(words::CATCH_PHRASE_NOUNS)
            )),

            ("color", "human") => Value::from(self.pick(words::COLORS)),
            ("color", "rgb") => Value::from(format!("#{}", self.chars_from(HEX, 6))),

            ("finance", "amount") => self.amount(args, 0.0)?,
            ("finance", "accountNumber") => Value::from(self.chars_from(DIGITS, length(args, 8)?)),
            ("finance", "currencyCode") => Value::from(self.pick(words::CURRENCY_CODES)),

            _ => {
                return Err(ProviderError::UnknownMethod {
                    namespace: namespace.to_string(),
                    method: method.to_string(),
                })
            }
        };
        Ok(value)
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for FakeProvider {
    fn has(&self, namespace: &str, method: &str) -> bool {
        METHODS
            .iter()
            .any(|(ns, methods)| *ns == namespace && methods.contains(&method))
    }

    fn call(&self, namespace: &str, method: &str, args: &[Value]) -> Result<Value, ProviderError> {
        self.dispatch(namespace, method, args)
    }
}

// ── Argument helpers ────────────────────────────────────────────────

fn invalid(message: String) -> ProviderError {
    ProviderError::InvalidArgument(message)
}

/// The options object, if any. Positional scalars are rejected.
fn options(args: &[Value]) -> Result<Option<&Map<String, Value>>, ProviderError> {
    match args.first() {
        None => Ok(None),
        Some(Value::Object(opts)) => Ok(Some(opts)),
        Some(other) => Err(invalid(format!("expected an options object, got {}", other))),
    }
}

/// A numeric option; missing or non-numeric values take the default.
fn bound(opts: &Map<String, Value>, key: &str, default: f64) -> f64 {
    opts.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// A length given positionally or as `{length}`.
fn length(args: &[Value], default: usize) -> Result<usize, ProviderError> {
    let value = match args.first() {
        None => return Ok(default),
        Some(Value::Object(opts)) => match opts.get("length") {
            Some(v) => v,
            None => return Ok(default),
        },
        Some(v) => v,
    };
    match value.as_f64() {
        Some(n) if n >= 0.0 => Ok(n as usize),
        _ => Err(invalid(format!("expected a length, got {}", value))),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn timestamp(when: DateTime<Utc>) -> Value {
    Value::from(when.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn alnum(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
