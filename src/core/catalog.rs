use super::types::{StrategyName, StrategyTier, Tariff};

/// The five strategy tiers, ascending by deposit range. Together they cover
/// 5,000-5,000,000 EUR with contiguous integer bounds.
static STRATEGIES: [StrategyTier; 5] = [
    StrategyTier {
        name: StrategyName::Start,
        min_value: 5_000.0,
        max_value: 9_999.0,
        min_purchase: 100.0,
        max_purchase: 1_000.0,
        min_years: 7,
        max_years: 30,
        step: 250.0,
        purchase_step: 50.0,
        description: "The fundamental first step towards durable, tangible wealth \
                      protected against inflation",
        years_description: "A 7-30+ year horizon gives the perspective needed to build \
                            solid wealth foundations",
    },
    StrategyTier {
        name: StrategyName::Balance,
        min_value: 10_000.0,
        max_value: 99_999.0,
        min_purchase: 250.0,
        max_purchase: 2_500.0,
        min_years: 7,
        max_years: 30,
        step: 500.0,
        purchase_step: 50.0,
        description: "Advanced wealth diversification through balanced capital allocation \
                      across different metal classes",
        years_description: "A 7-30+ year perspective is the start of the road towards \
                            lasting family wealth",
    },
    StrategyTier {
        name: StrategyName::Foundation,
        min_value: 100_000.0,
        max_value: 699_999.0,
        min_purchase: 500.0,
        max_purchase: 5_000.0,
        min_years: 15,
        max_years: 30,
        step: 5_000.0,
        purchase_step: 250.0,
        description: "A comprehensive solution for building a solid wealth foundation \
                      based on tangible assets",
        years_description: "A 15-30+ year horizon is the optimal window for the strategy \
                            to show its full potential",
    },
    StrategyTier {
        name: StrategyName::Optimal,
        min_value: 700_000.0,
        max_value: 2_099_999.0,
        min_purchase: 1_000.0,
        max_purchase: 20_000.0,
        min_years: 15,
        max_years: 30,
        step: 10_000.0,
        purchase_step: 500.0,
        description: "An advanced solution for creating substantial tangible wealth with \
                      the highest degree of resilience",
        years_description: "A 15-30+ year perspective frames the strategic growth of the \
                            portfolio",
    },
    StrategyTier {
        name: StrategyName::Prestige,
        min_value: 2_100_000.0,
        max_value: 5_000_000.0,
        min_purchase: 2_500.0,
        max_purchase: 50_000.0,
        min_years: 20,
        max_years: 30,
        step: 25_000.0,
        purchase_step: 500.0,
        description: "The essence of dynastic wealth building with a dominant share of \
                      strategic metals",
        years_description: "A 20-30+ year perspective reflects the horizon of planning \
                            cross-generational wealth",
    },
];

static START_TARIFFS: [Tariff; 1] = [Tariff {
    name: "GTS",
    min_value: 5_000.0,
    max_value: 9_999.0,
    agio: "3.5% of the activation amount",
    metals: "40% gold, 20% silver, 20% platinum, 20% palladium",
    storage: "1.5% net + VAT per year",
    advantages: &[
        "Low entry threshold",
        "Simple to manage",
        "Exposure to the core precious metals",
        "Additional purchases free of AGIO",
    ],
    details: "Additional purchases: 100-1,000 EUR/week free of AGIO",
}];

static BALANCE_TARIFFS: [Tariff; 3] = [
    Tariff {
        name: "GTS + GR S-3",
        min_value: 10_000.0,
        max_value: 29_999.0,
        agio: "3.5% for SSW + 300 EUR (flat) for Auvesta",
        metals: "GTS: 40% gold, 20% silver, 20% platinum, 20% palladium | \
                 GR: 50% gold, 50% silver",
        storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.08% net + VAT per month",
        advantages: &[
            "Balance between providers",
            "Metal diversification",
            "GR AGIO refunded 100% as a metal bonus",
            "Additional purchases free of AGIO",
        ],
        details: "50/50 split between SSW (GTS) and Auvesta (GR). \
                  Additional purchases: 250-2,500 EUR/week free of AGIO.",
    },
    Tariff {
        name: "GTS + GR M-6",
        min_value: 30_000.0,
        max_value: 49_999.0,
        agio: "3.5% for SSW + 600 EUR (flat) for Auvesta",
        metals: "GTS: 40% gold, 20% silver, 20% platinum, 20% palladium | \
                 GR: 50% gold, 50% silver",
        storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.07% net + VAT per month",
        advantages: &[
            "Balance between providers",
            "Metal diversification",
            "GR AGIO refunded 100% as a metal bonus",
            "Metal purchase prices: 1% below the S-3 tariff",
        ],
        details: "50/50 split between SSW (GTS) and Auvesta (GR). \
                  Additional purchases: 250-2,500 EUR/week free of AGIO.",
    },
    Tariff {
        name: "GTS + GR L-12",
        min_value: 50_000.0,
        max_value: 99_999.0,
        agio: "3.5% for SSW + 1,200 EUR (flat) for Auvesta",
        metals: "GTS: 40% gold, 20% silver, 20% platinum, 20% palladium | \
                 GR: 50% gold, 50% silver",
        storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.06% net + VAT per month",
        advantages: &[
            "Balance between providers",
            "Metal diversification",
            "GR AGIO refunded 100% as a metal bonus",
            "Metal purchase prices: 3% below the S-3 tariff",
        ],
        details: "50/50 split between SSW (GTS) and Auvesta (GR). \
                  Additional purchases: 250-2,500 EUR/week free of AGIO.",
    },
];

static FOUNDATION_TARIFFS: [Tariff; 2] = [
    Tariff {
        name: "GT + GR XL-24",
        min_value: 100_000.0,
        max_value: 299_999.0,
        agio: "3.5% for SSW + 2,400 EUR (flat) for Auvesta",
        metals: "GT: 20% gold, 10% silver, 10% platinum, 10% palladium, \
                 50% strategic metals | GR: 50% gold, 50% silver",
        storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.05% net + VAT per month",
        advantages: &[
            "Access to strategic metals",
            "Optimal storage costs",
            "GR AGIO refunded 100% as a metal bonus",
            "Metal purchase prices: 6% below the S-3 tariff",
        ],
        details: "50/50 split between SSW (GT) and Auvesta (GR). \
                  Additional purchases: 500-5,000 EUR/week free of AGIO.",
    },
    Tariff {
        name: "GT + GR VIP",
        min_value: 300_000.0,
        max_value: 699_999.0,
        agio: "3.5% for SSW + 2,400 EUR (flat) for Auvesta",
        metals: "GT: 20% gold, 10% silver, 10% platinum, 10% palladium, \
                 50% strategic metals | GR: 50% gold, 50% silver",
        storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.04% net + VAT per month",
        advantages: &[
            "Access to strategic metals",
            "Optimal storage costs",
            "GR AGIO refunded 100% as a metal bonus",
            "Metal purchase prices: 7% below the S-3 tariff",
        ],
        details: "50/50 split between SSW (GT) and Auvesta (GR). \
                  Additional purchases: 500-5,000 EUR/week free of AGIO.",
    },
];

static OPTIMAL_TARIFFS: [Tariff; 1] = [Tariff {
    name: "GT + GR VIP",
    min_value: 700_000.0,
    max_value: 2_099_999.0,
    agio: "3.5% for SSW + 2,400 EUR per each 150,000 EUR for Auvesta",
    metals: "GT: 20% gold, 10% silver, 10% platinum, 10% palladium, \
             50% strategic metals | GR: 50% gold, 50% silver",
    storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.04% net + VAT per month",
    advantages: &[
        "Maximum cost efficiency",
        "Ideal diversification",
        "Access to VIP tariffs",
        "Metal purchase prices: 7% below the S-3 tariff",
    ],
    details: "50/50 split between SSW (GT) and Auvesta (GR). Above 900,000 EUR a split \
              into at most 6 VIP deposits is recommended. \
              Additional purchases: 1,000-20,000 EUR/week free of AGIO.",
}];

static PRESTIGE_TARIFFS: [Tariff; 1] = [Tariff {
    name: "GTS + GT + GR VIP + SMH",
    min_value: 2_100_000.0,
    max_value: 5_000_000.0,
    agio: "3.5% for SSW (GTS, GT) + 2,400 EUR per each 150,000 EUR for Auvesta \
           + 0% for SMH",
    metals: "Composite portfolio in the proportions: 10% GTS, 20% GT, 30% GR, 40% SMH",
    storage: "SSW: 1.5% net + VAT per year | Auvesta: 0.04% net + VAT per month",
    advantages: &[
        "Maximum diversification",
        "Dominant share of strategic metals (SMH)",
        "Lowest holding costs",
        "Dedicated strategic-metals component",
    ],
    details: "Split: 10% GTS, 20% GT, 30% GR, 40% SMH. \
              Additional purchases: 2,500-50,000 EUR/week free of AGIO.",
}];

pub fn strategies() -> &'static [StrategyTier; 5] {
    &STRATEGIES
}

pub fn tier(name: StrategyName) -> &'static StrategyTier {
    match name {
        StrategyName::Start => &STRATEGIES[0],
        StrategyName::Balance => &STRATEGIES[1],
        StrategyName::Foundation => &STRATEGIES[2],
        StrategyName::Optimal => &STRATEGIES[3],
        StrategyName::Prestige => &STRATEGIES[4],
    }
}

pub fn tariffs_for(name: StrategyName) -> &'static [Tariff] {
    match name {
        StrategyName::Start => &START_TARIFFS,
        StrategyName::Balance => &BALANCE_TARIFFS,
        StrategyName::Foundation => &FOUNDATION_TARIFFS,
        StrategyName::Optimal => &OPTIMAL_TARIFFS,
        StrategyName::Prestige => &PRESTIGE_TARIFFS,
    }
}
