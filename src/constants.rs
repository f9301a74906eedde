// DOM contract with the host page.

// Hero container; the effect stays dormant on pages without it
pub const CONTAINER_ID: &str = "brow";

// Reflection targets, looked up inside the container
pub const REFLECTION_TARGET_SELECTOR: &str = ".bar";

// Extra chrome elements that only receive the glint sweep, looked up page-wide
pub const GLINT_TARGET_SELECTOR: &str = ".chrome-glint";

// Container attributes overriding `EffectConfig` values, e.g. `data-sweep-ms`
pub const CONFIG_ATTR_PREFIX: &str = "data-";
