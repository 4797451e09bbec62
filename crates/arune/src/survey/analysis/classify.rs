use serde::{Deserialize, Serialize};

use super::config::BandThresholds;

/// Five-way financial-personality classification derived from the total
/// score. Variants are ordered most to least aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Pig,
    Bull,
    Lion,
    Sheep,
    Turtle,
}

impl AnimalType {
    /// Classify a total score against the configured band floors.
    pub(crate) fn from_total(total: u16, bands: &BandThresholds) -> Self {
        if total >= bands.aggressive {
            AnimalType::Pig
        } else if total >= bands.active {
            AnimalType::Bull
        } else if total >= bands.balanced {
            AnimalType::Lion
        } else if total >= bands.conservative {
            AnimalType::Sheep
        } else {
            AnimalType::Turtle
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AnimalType::Pig => "돼지",
            AnimalType::Bull => "황소",
            AnimalType::Lion => "사자",
            AnimalType::Sheep => "양",
            AnimalType::Turtle => "거북이",
        }
    }

    /// Display label with the customary type suffix, e.g. "돼지형".
    pub fn type_label(self) -> String {
        format!("{}형", self.label())
    }

    pub const fn description(self) -> &'static str {
        match self {
            AnimalType::Pig => {
                "탐욕에 따라 이리저리 움직이며 자신이 감당하기 힘든 위험을 짊어지는 유형입니다. 고위험 투자 전 충분한 학습과 위험 관리가 필요합니다."
            }
            AnimalType::Bull => {
                "상승장에서 적극적으로 투자하여 수익을 추구하는 유형입니다. 주식형 펀드나 ETF 투자에 적합하며, 장기 투자 관점이 중요합니다."
            }
            AnimalType::Lion => {
                "균형잡힌 투자로 안정적인 수익을 추구하는 유형입니다. 위험과 수익의 균형을 맞추며 체계적인 자산 배분을 추천합니다."
            }
            AnimalType::Sheep => {
                "시장 변화에 수동적이고 두려움에 따라 보수적으로 투자하는 유형입니다. 원금보장형 상품 위주로 포트폴리오를 구성하는 것이 좋습니다."
            }
            AnimalType::Turtle => {
                "손실을 극도로 회피하며 안전한 투자만을 선호하는 유형입니다. 정기예금, 적금 등 안전자산 중심의 자산 관리가 적합합니다."
            }
        }
    }
}
