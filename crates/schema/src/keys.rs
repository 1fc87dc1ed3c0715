//! Canonical key lists shared with the growth-water kernel.
//!
//! Order matters: [`PARAM_KEYS`] is the element order of the kernel's
//! parameter vector, the weather and harvest lists are column orders of the
//! packed matrices, and [`OUTPUT_COLUMNS`] names the kernel's output columns
//! left to right.

/// Every model parameter, in kernel order.
#[rustfmt::skip]
pub const PARAM_KEYS: &[&str] = &[
    // initial state and plant physiology
    "LOG10CLVI", "LOG10CRESI", "LOG10CRTI", "CSTI", "LOG10LAII", "PHENI", "TILTOTI", "FRTILGI",
    "LT50I", "CLAIV", "COCRESMX", "CSTAVM", "DAYLB", "DAYLP", "DLMXGE", "FSLAMIN", "FSMAX",
    "HAGERE", "KLAI", "LAICR", "LAIEFT", "LAITIL", "LFWIDG", "LFWIDV", "NELLVM", "PHENCR", "PHY",
    "RDRSCO", "RDRSMX", "RDRTEM", "RGENMX", "ROOTDM", "RRDMAX", "RUBISC", "LSHAPE", "SIMAX1T",
    "SLAMAX", "TBASE", "TCRES", "TOPTGE", "TRANCO", "YG",
    // site and soil water
    "LAT", "WCI", "FWCAD", "FWCWP", "FWCFC", "FWCWET", "WCST", "WpoolMax",
    // frost hardening and snow
    "Dparam", "FGAS", "FO2MX", "KTSNOW", "Hparam", "KRDRANAER", "KRESPHARD", "KRSR3H",
    "KRTOTAER", "KSNOW", "LAMBDAsoil", "LDT50A", "LDT50B", "LT50MN", "LT50MX", "RATEDMX",
    "reHardRedDay", "RHOnewSnow", "RHOpack", "SWret", "SWrf", "THARDMX", "TmeltFreeze",
    "TrainSnow", "TsurfDiff",
    // tiller demography, vernalisation, litter
    "KLUETILG", "FRTILGG1I", "DAYLG1G2", "RGRTG1G2", "RDRTMIN", "TVERN", "TVERND", "RDRSTUB",
    "LERGB", "RDRROOT", "DAYLA", "DAYLRV", "FCOCRESMN", "KCRT", "VERNDI", "LERVA", "LERVB",
    "LERGA", "RDRTILMIN", "RDRHARVMAX", "FGRESSI", "BD", "HARVFRD", "EBIOMAX", "KBASAL",
    "RDRWMAX", "BASALI", "ABASAL", "TVERNDMN", "DAYLGEMN", "TRANRFCR", "DELE", "DELD",
    // irrigation and environment
    "IRRIGF", "DRATE", "CO2A", "poolInfilLimit",
    // harvest and reseed policy
    "fixed_removal", "opt_harvfrin", "irr_frm_paw", "reseed_harv_delay", "reseed_LAI",
    "reseed_TILG2", "reseed_TILG1", "reseed_TILV", "reseed_CLV", "reseed_CRES", "reseed_CST",
    "reseed_CSTUB", "pass_soil_moist",
    // on-farm storage
    "use_storage", "runoff_from_rain", "calc_ind_store_demand", "stor_full_refil_doy",
    "abs_max_irr", "irrigated_area", "I_h2o_store_vol", "h2o_store_max_vol", "h2o_store_SA",
    "runoff_area", "runoff_frac", "stor_refill_min", "stor_refill_losses", "stor_leakage",
    "stor_irr_ineff", "stor_reserve_vol",
];

/// Parameters describing the sward itself. Disjoint from [`SITE_PARAM_KEYS`].
#[rustfmt::skip]
pub const PLANT_PARAM_KEYS: &[&str] = &[
    "LOG10CLVI", "LOG10CRESI", "LOG10CRTI", "CSTI", "LOG10LAII", "PHENI", "TILTOTI", "FRTILGI",
    "LT50I", "CLAIV", "COCRESMX", "CSTAVM", "DAYLB", "DAYLP", "DLMXGE", "FSLAMIN", "FSMAX",
    "HAGERE", "KLAI", "LAICR", "LAIEFT", "LAITIL", "LFWIDG", "LFWIDV", "NELLVM", "PHENCR", "PHY",
    "RDRSCO", "RDRSMX", "RDRTEM", "RGENMX", "ROOTDM", "RRDMAX", "RUBISC", "LSHAPE", "SIMAX1T",
    "SLAMAX", "TBASE", "TCRES", "TOPTGE", "TRANCO", "YG", "Dparam", "Hparam", "KRDRANAER",
    "KRESPHARD", "KRSR3H", "KRTOTAER", "LDT50A", "LDT50B", "LT50MN", "LT50MX", "RATEDMX",
    "reHardRedDay", "THARDMX", "KLUETILG", "FRTILGG1I", "DAYLG1G2", "RGRTG1G2", "RDRTMIN",
    "TVERN", "TVERND", "RDRSTUB", "LERGB", "RDRROOT", "DAYLA", "DAYLRV", "FCOCRESMN", "KCRT",
    "VERNDI", "LERVA", "LERVB", "LERGA", "RDRTILMIN", "RDRHARVMAX", "FGRESSI", "HARVFRD",
    "EBIOMAX", "KBASAL", "RDRWMAX", "BASALI", "ABASAL", "TVERNDMN", "DAYLGEMN", "TRANRFCR",
    "DELE", "DELD",
];

/// Soil, climate-site and management parameters.
#[rustfmt::skip]
pub const SITE_PARAM_KEYS: &[&str] = &[
    "LAT", "WCI", "FWCAD", "FWCWP", "FWCFC", "FWCWET", "WCST", "WpoolMax", "FGAS", "FO2MX",
    "KTSNOW", "KSNOW", "LAMBDAsoil", "RHOnewSnow", "RHOpack", "SWret", "SWrf", "TmeltFreeze",
    "TrainSnow", "TsurfDiff", "BD", "IRRIGF", "DRATE", "CO2A", "poolInfilLimit",
    "fixed_removal", "opt_harvfrin", "irr_frm_paw", "reseed_harv_delay", "reseed_LAI",
    "reseed_TILG2", "reseed_TILG1", "reseed_TILV", "reseed_CLV", "reseed_CRES", "reseed_CST",
    "reseed_CSTUB", "pass_soil_moist", "use_storage", "runoff_from_rain",
    "calc_ind_store_demand", "stor_full_refil_doy", "abs_max_irr", "irrigated_area",
    "I_h2o_store_vol", "h2o_store_max_vol", "h2o_store_SA", "runoff_area", "runoff_frac",
    "stor_refill_min", "stor_refill_losses", "stor_leakage", "stor_irr_ineff",
    "stor_reserve_vol",
];

/// Operational switches the kernel reads as integers.
pub const INTEGER_SWITCHES: &[&str] = &[
    "fixed_removal",
    "opt_harvfrin",
    "irr_frm_paw",
    "pass_soil_moist",
    "use_storage",
    "runoff_from_rain",
    "calc_ind_store_demand",
    "stor_full_refil_doy",
];

/// Minimum number of days between a reseed and the next harvest.
pub const HARVEST_DELAY_KEY: &str = "reseed_harv_delay";

/// Per-day ceiling on irrigation delivered to the field (mm).
pub const ABS_MAX_IRR_KEY: &str = "abs_max_irr";

/// Switch selecting "remove a fixed amount" harvesting.
pub const FIXED_REMOVAL_KEY: &str = "fixed_removal";

/// Weather columns when potential evapotranspiration is supplied.
pub const WEATHER_KEYS_PET: &[&str] = &[
    "year",
    "doy",
    "radn",
    "tmin",
    "tmax",
    "rain",
    "pet",
    "max_irr",
    "irr_trig",
    "irr_targ",
    "irr_trig_store",
    "irr_targ_store",
    "external_inflow",
];

/// Weather columns when the kernel computes PET from the Penman equation.
pub const WEATHER_KEYS_PENMAN: &[&str] = &[
    "year",
    "doy",
    "radn",
    "tmin",
    "tmax",
    "rain",
    "vpa",
    "wind",
    "max_irr",
    "irr_trig",
    "irr_targ",
    "irr_trig_store",
    "irr_targ_store",
    "external_inflow",
];

/// Harvest and reseed control columns.
pub const HARVEST_KEYS: &[&str] = &[
    "year",
    "doy",
    "frac_harv",
    "harv_trig",
    "harv_targ",
    "weed_dm_frac",
    "reseed_trig",
    "reseed_basal",
];

/// Kernel output columns, left to right.
#[rustfmt::skip]
pub const OUTPUT_COLUMNS: &[&str] = &[
    "Time", "year", "doy", "DAVTMP", "CLV", "CLVD", "TRANRF", "CRES", "CRT", "CST", "CSTUB",
    "VERND", "PHOT", "LAI", "RESMOB", "RAIN", "PHEN", "LT50", "DAYL", "TILG2", "TILG1", "TILV",
    "WAL", "WCLM", "DAYLGE", "RDLVD", "HARVFR", "DM", "RES", "LERG", "PHENRF", "RLEAF", "SLA",
    "TILTOT", "RGRTV", "RDRTIL", "GRT", "RDRL", "VERN", "DRAIN", "RUNOFF", "EVAP", "TRAN", "LINT",
    "DEBUG", "ROOTD", "TSIZE", "LERV", "WCL", "HARVFRIN", "SLANEW", "YIELD", "BASAL", "GTILV",
    "DTILV", "FS", "IRRIG", "WAFC", "IRR_TARG", "IRR_TRIG", "IRRIG_DEM", "RYE_YIELD",
    "WEED_YIELD", "DM_RYE_RM", "DM_WEED_RM", "DMH_RYE", "DMH_WEED", "DMH", "WAWP", "MXPAW", "PAW",
    "RESEEDED",
    // storage budget
    "irrig_dem_store", "irrig_store", "irrig_scheme", "h2o_store_vol", "h2o_store_per_area",
    "IRR_TRIG_store", "IRR_TARG_store", "store_runoff_in", "store_leak_out", "store_irr_loss",
    "store_evap_out", "store_scheme_in", "store_scheme_in_loss", "external_inflow",
    "store_overflow",
];

/// Returns the position of `name` in `keys`.
pub fn key_index(keys: &[&str], name: &str) -> Option<usize> {
    keys.iter().position(|k| *k == name)
}
