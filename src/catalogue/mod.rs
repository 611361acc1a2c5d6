pub mod cases;

use console::style;
use std::fmt;

/// Hazard class a case exhibits when its trigger condition holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HazardClass {
    /// Write past the declared end of the fixed buffer.
    OutOfBoundsWrite,
    /// Reads/writes to unintended memory, information disclosure, or crash.
    MemoryMisuse,
    /// Arbitrary command execution with the process's privileges.
    CommandExecution,
    /// Predictable values from a non-cryptographic source.
    PredictableValue,
    /// Correct by construction; present as a contrast case.
    None,
}

impl fmt::Display for HazardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            HazardClass::OutOfBoundsWrite => style("OOB-WRITE").red().bold().to_string(),
            HazardClass::MemoryMisuse => style("MEM-MISUSE").red().bold().to_string(),
            HazardClass::CommandExecution => style("CMD-EXEC").yellow().bold().to_string(),
            HazardClass::PredictableValue => style("PREDICTABLE").cyan().bold().to_string(),
            HazardClass::None => style("NONE").dim().to_string(),
        };
        f.write_str(&s)
    }
}

/// One catalogued hazard case with meta-data for listings and attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardCase {
    /// Unique identifier (kebab-case), also the attribution label logged
    /// before the case runs.
    pub id: &'static str,
    /// The unsafe operation the case performs.
    pub operation: &'static str,
    /// Condition under which the hazard fires.
    pub trigger: &'static str,
    /// Resulting hazard class.
    pub class: HazardClass,
}

/// The full catalogue, in execution order. The runner dispatches exactly
/// these cases, in exactly this order.
pub const CASES: &[HazardCase] = &[
  HazardCase {
    id: "overflow-copy",
    operation: "strcpy(buffer, input) with no length check",
    trigger: "len(input) >= capacity",
    class: HazardClass::OutOfBoundsWrite,
  },
  HazardCase {
    id: "overflow-concat",
    operation: "strcat(buffer, \" suffix\") with no bound check",
    trigger: "existing content + suffix exceeds capacity",
    class: HazardClass::OutOfBoundsWrite,
  },
  HazardCase {
    id: "overflow-format",
    operation: "sprintf(buffer, \"User: %s\", input) with no bound check",
    trigger: "formatted length exceeds capacity",
    class: HazardClass::OutOfBoundsWrite,
  },
  HazardCase {
    id: "unbounded-stdin-read",
    operation: "read a stdin line into the buffer with no length limit",
    trigger: "any input line >= capacity",
    class: HazardClass::OutOfBoundsWrite,
  },
  HazardCase {
    id: "bounded-token-read",
    operation: "scanf(\"%s\", buffer) with no width specifier",
    trigger: "token length >= capacity",
    class: HazardClass::OutOfBoundsWrite,
  },
  HazardCase {
    id: "format-string-injection",
    operation: "printf(input) with input in format position",
    trigger: "input contains format directives (%s, %x, %n)",
    class: HazardClass::MemoryMisuse,
  },
  HazardCase {
    id: "command-injection",
    operation: "system(input) with input as the full command line",
    trigger: "input contains shell metacharacters",
    class: HazardClass::CommandExecution,
  },
  HazardCase {
    id: "heap-lifecycle",
    operation: "malloc(100) paired with exactly one free, no reuse",
    trigger: "none (contrast case)",
    class: HazardClass::None,
  },
  HazardCase {
    id: "bulk-copy-overrun",
    operation: "memcpy(buffer, input, 200) with a fixed count > capacity",
    trigger: "always; count is independent of input length",
    class: HazardClass::OutOfBoundsWrite,
  },
  HazardCase {
    id: "weak-randomness",
    operation: "rand() with no seed control exposed",
    trigger: "any use where unpredictability matters",
    class: HazardClass::PredictableValue,
  },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_runs_in_fixed_order() {
        let ids: Vec<&str> = CASES.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "overflow-copy",
                "overflow-concat",
                "overflow-format",
                "unbounded-stdin-read",
                "bounded-token-read",
                "format-string-injection",
                "command-injection",
                "heap-lifecycle",
                "bulk-copy-overrun",
                "weak-randomness",
            ]
        );
    }

    #[test]
    fn case_ids_are_unique() {
        let ids: HashSet<&str> = CASES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CASES.len());
    }

    #[test]
    fn heap_lifecycle_is_the_only_hazardless_case() {
        let safe: Vec<&str> = CASES
            .iter()
            .filter(|c| c.class == HazardClass::None)
            .map(|c| c.id)
            .collect();
        assert_eq!(safe, ["heap-lifecycle"]);
    }
}
