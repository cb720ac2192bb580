//! Companion code snippets returned with every generation.

use indexmap::IndexMap;

const PYTHON_SNIPPET: &str = concat!(
    "import math\n",
    "def estimate_monolith_gravity(mass_kg: float, distance_m: float) -> float:\n",
    "    \"\"\"Return gravitational acceleration (m/s^2) at a distance from the monolith using Newton's law.\n",
    "    G = 6.67430e-11\n",
    "    return G * mass_kg / (distance_m ** 2)\n\n",
    "def estimate_energy_emission(area_m2: float, emissive_w_per_m2: float) -> float:\n",
    "    \"\"\"Estimate radiant power output (Watts) from a glowing surface.\n",
    "    return area_m2 * emissive_w_per_m2\n",
);

const KOTLIN_SNIPPET: &str = concat!(
    "import kotlin.math.pow\n\n",
    "object MonolithPhysics {\n",
    "  private const val G: Double = 6.67430e-11\n\n",
    "  fun gravity(massKg: Double, distanceM: Double): Double {\n",
    "    return G * massKg / distanceM.pow(2.0)\n",
    "  }\n\n",
    "  fun energy(areaM2: Double, emissiveWPerM2: Double): Double {\n",
    "    return areaM2 * emissiveWPerM2\n",
    "  }\n",
    "}\n",
);

/// Snippets keyed by language, in a stable order (`python`, then `kotlin`).
pub fn code_snippets() -> IndexMap<String, String> {
    IndexMap::from([
        ("python".to_string(), PYTHON_SNIPPET.to_string()),
        ("kotlin".to_string(), KOTLIN_SNIPPET.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_python_and_kotlin_in_order() {
        let snippets = code_snippets();
        let keys: Vec<&str> = snippets.keys().map(String::as_str).collect();
        assert_eq!(keys, ["python", "kotlin"]);
    }

    #[test]
    fn snippets_carry_the_gravity_helpers() {
        let snippets = code_snippets();
        assert!(snippets["python"].contains("def estimate_monolith_gravity"));
        assert!(snippets["python"].contains("G = 6.67430e-11"));
        assert!(snippets["kotlin"].contains("object MonolithPhysics"));
        assert!(snippets["kotlin"].ends_with("}\n"));
    }
}
