//! # Market Dynamics Model
//!
//! The slider-driven "market dynamics" toy calculator: a handful of derived
//! ratios plus canned narrative text selected by threshold bands. Deliberately
//! crude arithmetic with no claim to realism; every function here is pure and
//! total.
//!
//! ## Metrics
//! - profit margin = price - cost
//! - value/price and quality/cost ratios, falling back to 0.0 when the
//!   denominator is zero (no division ever raises)
//! - sustainability = (margin + value/price * 20 + quality/cost * 10) / 3
//!
//! ## Narrative
//! `predict` maps the metrics through fixed threshold bands to an outlook
//! headline, per-variable insights, risk factors, and a timeline estimate.

use serde::Serialize;

/// The five slider inputs, each on a 0..=100 scale
///
/// `employment_impact` reads 0 = job creation, 50 = neutral, 100 = massive
/// job losses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInputs {
    pub cost: f64,
    pub value: f64,
    pub price: f64,
    pub quality: f64,
    pub employment_impact: f64,
}

/// Derived ratios for a set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetrics {
    pub profit_margin: f64,
    pub value_to_price: f64,
    pub quality_to_cost: f64,
    pub sustainability: f64,
}

impl MarketInputs {
    /// Compute the derived metrics, with zero-denominator ratios reading 0.0
    pub fn metrics(&self) -> MarketMetrics {
        let profit_margin = self.price - self.cost;
        let value_to_price = if self.price > 0.0 {
            self.value / self.price
        } else {
            0.0
        };
        let quality_to_cost = if self.cost > 0.0 {
            self.quality / self.cost
        } else {
            0.0
        };
        let sustainability = (profit_margin + value_to_price * 20.0 + quality_to_cost * 10.0) / 3.0;
        MarketMetrics {
            profit_margin,
            value_to_price,
            quality_to_cost,
            sustainability,
        }
    }
}

/// Primary market outlook, banded on the sustainability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    MarketCollapse,
    MassExtinction,
    ConsolidationCrisis,
    PrecariousEquilibrium,
    CautiousOptimism,
    BoomIncoming,
    Utopia,
}

impl Outlook {
    /// Band lookup on the sustainability score
    pub fn from_sustainability(sustainability: f64) -> Self {
        if sustainability < -20.0 {
            Outlook::MarketCollapse
        } else if sustainability < -10.0 {
            Outlook::MassExtinction
        } else if sustainability < 0.0 {
            Outlook::ConsolidationCrisis
        } else if sustainability < 10.0 {
            Outlook::PrecariousEquilibrium
        } else if sustainability < 20.0 {
            Outlook::CautiousOptimism
        } else if sustainability < 30.0 {
            Outlook::BoomIncoming
        } else {
            Outlook::Utopia
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Outlook::MarketCollapse => "Market Collapse Imminent",
            Outlook::MassExtinction => "Mass AI Company Extinction",
            Outlook::ConsolidationCrisis => "Industry Consolidation Crisis",
            Outlook::PrecariousEquilibrium => "Precarious Equilibrium",
            Outlook::CautiousOptimism => "Cautious Optimism",
            Outlook::BoomIncoming => "AI Boom Incoming",
            Outlook::Utopia => "AI Utopia Achieved",
        }
    }

    pub fn reasoning(self) -> &'static str {
        match self {
            Outlook::MarketCollapse => "The fundamental economics are catastrophically broken.",
            Outlook::MassExtinction => "Current business models are completely unsustainable.",
            Outlook::ConsolidationCrisis => {
                "Only the largest players with deep pockets will survive."
            }
            Outlook::PrecariousEquilibrium => "The market is barely holding together.",
            Outlook::CautiousOptimism => "Signs of a sustainable business model are emerging.",
            Outlook::BoomIncoming => "Strong fundamentals suggest rapid growth ahead.",
            Outlook::Utopia => "Perfect market conditions for explosive AI adoption.",
        }
    }
}

/// Per-variable insight lines selected by threshold bands
pub fn insights(inputs: &MarketInputs) -> Vec<&'static str> {
    let metrics = inputs.metrics();
    let mut lines = Vec::with_capacity(6);

    lines.push(if inputs.cost > 80.0 {
        "Critical cost crisis: infrastructure costs are crushing profit margins."
    } else if inputs.cost > 60.0 {
        "High cost pressure: companies are burning cash fast."
    } else if inputs.cost > 40.0 {
        "Moderate cost burden: manageable but requires careful optimization."
    } else {
        "Cost advantage: low operational costs enable competitive pricing."
    });

    lines.push(if inputs.value > 80.0 {
        "High value delivery: customers see massive returns."
    } else if inputs.value > 60.0 {
        "Solid value proposition: clear benefits justify AI investments."
    } else if inputs.value > 40.0 {
        "Questionable value: some benefits but customers remain skeptical."
    } else {
        "Value crisis: customers can't justify AI spending."
    });

    lines.push(if inputs.price > 80.0 {
        "Premium pricing: high prices reflect strong value or a bubble."
    } else if inputs.price > 60.0 {
        "Healthy pricing: good balance between accessibility and profitability."
    } else if inputs.price > 40.0 {
        "Competitive pricing: moderate prices to drive adoption."
    } else {
        "Race to the bottom: unsustainably low prices destroying industry profits."
    });

    lines.push(if inputs.quality > 80.0 {
        "Exceptional quality: AI systems deliver reliable, impressive results."
    } else if inputs.quality > 60.0 {
        "Good quality: systems work well for most use cases."
    } else if inputs.quality > 40.0 {
        "Inconsistent quality: results are hit-or-miss, limiting adoption."
    } else {
        "Quality crisis: poor AI performance is destroying customer trust."
    });

    lines.push(if inputs.employment_impact > 80.0 {
        "Employment catastrophe: massive job displacement causing social unrest."
    } else if inputs.employment_impact > 60.0 {
        "Significant job displacement across multiple sectors."
    } else if inputs.employment_impact > 40.0 {
        "Employment transition: displacement balanced by new opportunities."
    } else if inputs.employment_impact > 20.0 {
        "Job market shift: some displacement but strong new job creation."
    } else {
        "Employment boom: AI creating more jobs than it eliminates."
    });

    lines.push(if metrics.profit_margin > 20.0 {
        "Healthy margins: strong profitability attracts new entrants."
    } else if metrics.profit_margin > 0.0 {
        "Thin margins: barely profitable, vulnerable to market shifts."
    } else if metrics.profit_margin > -20.0 {
        "Burning cash: unsustainable losses require rapid improvement or exit."
    } else {
        "Financial disaster: catastrophic losses will bankrupt most companies."
    });

    lines
}

/// Risk factors triggered by combinations of inputs; empty when none apply
pub fn risk_factors(inputs: &MarketInputs) -> Vec<&'static str> {
    let mut risks = Vec::new();
    if inputs.cost > 70.0 && inputs.price < 30.0 {
        risks.push("Profit squeeze: high costs with low prices create unsustainable unit economics.");
    }
    if inputs.value < 30.0 && inputs.price > 50.0 {
        risks.push("Value-price mismatch: customers won't pay high prices for low value.");
    }
    if inputs.quality < 40.0 {
        risks.push("Quality crisis: poor AI performance will destroy market confidence.");
    }
    if inputs.cost > 80.0 && inputs.quality < 60.0 {
        risks.push("Efficiency crisis: high costs not delivering proportional quality.");
    }
    risks
}

/// Timeline estimate banded on the sustainability score
pub fn timeline(sustainability: f64) -> &'static str {
    if sustainability > 15.0 {
        "Next 6-12 months: rapid market expansion and new player entry."
    } else if sustainability > 0.0 {
        "Next 1-2 years: gradual market maturation with selective growth."
    } else if sustainability > -10.0 {
        "Next 6-18 months: significant market consolidation and company failures."
    } else {
        "Next 3-6 months: industry-wide crisis and potential market collapse."
    }
}

/// Full narrative prediction for a set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub metrics: MarketMetrics,
    pub outlook: Outlook,
    pub insights: Vec<&'static str>,
    pub risk_factors: Vec<&'static str>,
    pub timeline: &'static str,
}

/// Compute metrics and select every narrative band for the inputs
pub fn predict(inputs: &MarketInputs) -> Prediction {
    let metrics = inputs.metrics();
    Prediction {
        metrics,
        outlook: Outlook::from_sustainability(metrics.sustainability),
        insights: insights(inputs),
        risk_factors: risk_factors(inputs),
        timeline: timeline(metrics.sustainability),
    }
}
