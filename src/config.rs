// Suite configuration
//
// Built once, then passed by value into `Suite::new`. There is no other
// benchmark state.

use std::env;

use crate::error::ConfigError;
use crate::Order;

pub const SIZES_VAR: &str = "HEAP_BENCH_SIZES";
pub const ORDERS_VAR: &str = "HEAP_BENCH_ORDERS";
pub const PIN_CPU_VAR: &str = "HEAP_BENCH_PIN_CPU";

/// What the suite measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
   /// Size classes. Small sizes fit in cache; large ones expose
   /// complexity differences that small sizes hide.
   pub sizes: Vec<usize>,
   /// Order patterns used for insertion cases.
   pub orders: Vec<Order>,
   /// Pin the benchmarking thread to this CPU before running.
   pub pin_cpu: Option<usize>,
}

impl Default for SuiteConfig {
   fn default() -> Self {
      Self {
         sizes: vec![1_000, 1_000_000],
         orders: Order::ALL.to_vec(),
         pin_cpu: None,
      }
   }
}

impl SuiteConfig {
   /// Defaults, overridden by `HEAP_BENCH_SIZES`, `HEAP_BENCH_ORDERS` and
   /// `HEAP_BENCH_PIN_CPU` where set.
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|var| env::var(var).ok())
   }

   /// Same as `from_env` with an explicit variable source.
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let mut config = Self::default();

      if let Some(raw) = lookup(SIZES_VAR) {
         let mut sizes = Vec::new();
         for s in split_list(SIZES_VAR, &raw)? {
            let size = parse_size(s)
               .ok_or_else(|| ConfigError::BadSize { var: SIZES_VAR, value: s.to_owned() })?;
            push_unique(&mut sizes, size, SIZES_VAR, s)?;
         }
         config.sizes = sizes;
      }

      if let Some(raw) = lookup(ORDERS_VAR) {
         let mut orders = Vec::new();
         for s in split_list(ORDERS_VAR, &raw)? {
            let order: Order =
               s.parse().map_err(|source| ConfigError::BadOrder { var: ORDERS_VAR, source })?;
            push_unique(&mut orders, order, ORDERS_VAR, s)?;
         }
         config.orders = orders;
      }

      if let Some(raw) = lookup(PIN_CPU_VAR) {
         let cpu = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::BadCpu { var: PIN_CPU_VAR, value: raw.clone() })?;
         config.pin_cpu = Some(cpu);
      }

      Ok(config)
   }
}

fn split_list<'a>(var: &'static str, raw: &'a str) -> Result<Vec<&'a str>, ConfigError> {
   let parts: Vec<&str> = raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
   if parts.is_empty() {
      return Err(ConfigError::Empty { var });
   }
   Ok(parts)
}

// `1K` and `1000` are the same size; two spellings would give two cases
// with one name.
fn push_unique<T: PartialEq>(
   list: &mut Vec<T>,
   value: T,
   var: &'static str,
   raw: &str,
) -> Result<(), ConfigError> {
   if list.contains(&value) {
      return Err(ConfigError::Duplicate { var, value: raw.to_owned() });
   }
   list.push(value);
   Ok(())
}

/// `1000`, `1K`, `1M`, `10k`. Zero is accepted here and rejected by the
/// generator.
pub fn parse_size(s: &str) -> Option<usize> {
   let s = s.trim();
   let (digits, scale) = match s.char_indices().last()? {
      (i, 'k' | 'K') => (&s[..i], 1_000),
      (i, 'm' | 'M') => (&s[..i], 1_000_000),
      _ => (s, 1),
   };
   digits.replace('_', "").parse::<usize>().ok()?.checked_mul(scale)
}

/// Inverse of `parse_size` for case names: `1K`, `1M`, otherwise digits.
pub fn format_size(n: usize) -> String {
   match n {
      0 => "0".to_owned(),
      n if n % 1_000_000 == 0 => format!("{}M", n / 1_000_000),
      n if n % 1_000 == 0 => format!("{}K", n / 1_000),
      n => n.to_string(),
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use std::collections::HashMap;

   fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> =
         vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
      move |k: &str| map.get(k).cloned()
   }

   #[test]
   fn unset_means_defaults() {
      assert_eq!(SuiteConfig::from_lookup(lookup(&[])).unwrap(), SuiteConfig::default());
   }

   #[test]
   fn overrides() {
      let c = SuiteConfig::from_lookup(lookup(&[
         (SIZES_VAR, "1K, 10k,1M"),
         (ORDERS_VAR, "random,ascending"),
         (PIN_CPU_VAR, "2"),
      ]))
      .unwrap();
      assert_eq!(c.sizes, vec![1_000, 10_000, 1_000_000]);
      assert_eq!(c.orders, vec![Order::Random, Order::Ascending]);
      assert_eq!(c.pin_cpu, Some(2));
   }

   #[test]
   fn bad_values() {
      assert_eq!(
         SuiteConfig::from_lookup(lookup(&[(SIZES_VAR, "lots")])).unwrap_err(),
         ConfigError::BadSize { var: SIZES_VAR, value: "lots".into() }
      );
      assert_eq!(
         SuiteConfig::from_lookup(lookup(&[(ORDERS_VAR, " , ")])).unwrap_err(),
         ConfigError::Empty { var: ORDERS_VAR }
      );
      assert!(matches!(
         SuiteConfig::from_lookup(lookup(&[(ORDERS_VAR, "sideways")])),
         Err(ConfigError::BadOrder { .. })
      ));
   }

   #[test]
   fn repeated_values_are_rejected() {
      assert_eq!(
         SuiteConfig::from_lookup(lookup(&[(SIZES_VAR, "1K,1000")])).unwrap_err(),
         ConfigError::Duplicate { var: SIZES_VAR, value: "1000".into() }
      );
      assert_eq!(
         SuiteConfig::from_lookup(lookup(&[(ORDERS_VAR, "ascending,asc")])).unwrap_err(),
         ConfigError::Duplicate { var: ORDERS_VAR, value: "asc".into() }
      );
   }

   #[test]
   fn size_text() {
      assert_eq!(parse_size("1_000"), Some(1_000));
      assert_eq!(parse_size("M"), None);
      assert_eq!(format_size(1_000), "1K");
      assert_eq!(format_size(1_000_000), "1M");
      assert_eq!(format_size(5), "5");
      assert_eq!(format_size(1_500), "1500");
   }
}
