use serde::{Deserialize, Serialize};

use super::classify::AnimalType;
use super::scores::CategoryScores;

/// Tier floors: `excellent` at and above 75, `adequate` from 50, everything
/// below needs improvement.
const EXCELLENT_FLOOR: u8 = 75;
const ADEQUATE_FLOOR: u8 = 50;

/// Per-category advice lists, keyed the way the stored report document keys
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub spending: Vec<String>,
    pub saving: Vec<String>,
    pub investment: Vec<String>,
    pub risk: Vec<String>,
}

pub(crate) fn recommendations(scores: &CategoryScores, animal: AnimalType) -> Recommendations {
    Recommendations {
        spending: spending_advice(scores.spending),
        saving: saving_advice(scores.saving),
        investment: investment_advice(scores.investment, animal),
        risk: risk_advice(scores.risk_management),
    }
}

fn collect(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

fn spending_advice(score: u8) -> Vec<String> {
    if score >= EXCELLENT_FLOOR {
        collect(&[
            "지출 관리가 매우 우수합니다",
            "현재 수준을 유지하되, 가끔 자신에게 보상하는 지출도 고려하세요",
            "장기 목표를 위한 지출 계획을 세워보세요",
        ])
    } else if score >= ADEQUATE_FLOOR {
        collect(&[
            "지출 관리가 양호한 편입니다",
            "고정비와 변동비를 명확히 구분하여 관리하세요",
            "월별 지출 예산을 설정하고 추적해보세요",
        ])
    } else {
        collect(&[
            "지출 관리에 개선이 필요합니다",
            "3개월간 가계부를 작성하여 지출 패턴을 파악하세요",
            "불필요한 구독 서비스나 정기 결제를 점검하세요",
            "충동 구매를 줄이기 위해 24시간 규칙을 적용해보세요",
        ])
    }
}

fn saving_advice(score: u8) -> Vec<String> {
    if score >= EXCELLENT_FLOOR {
        collect(&[
            "저축 습관이 매우 좋습니다",
            "비상금은 충분히 확보되어 있는지 점검하세요",
            "여유 자금의 일부는 투자로 전환을 고려해보세요",
        ])
    } else if score >= ADEQUATE_FLOOR {
        collect(&[
            "저축 습관이 양호합니다",
            "월 소득의 20-30%를 저축 목표로 설정하세요",
            "자동이체를 활용하여 저축을 자동화하세요",
        ])
    } else {
        collect(&[
            "저축 습관을 개선할 필요가 있습니다",
            "월급의 10%부터 시작하여 점진적으로 비율을 높이세요",
            "비상금 3-6개월치를 우선 목표로 설정하세요",
            "저축 전용 계좌를 개설하여 분리 관리하세요",
        ])
    }
}

/// Investment advice stacks the score tier with two lines specific to the
/// classified animal type.
fn investment_advice(score: u8, animal: AnimalType) -> Vec<String> {
    let mut advice = if score >= EXCELLENT_FLOOR {
        collect(&[
            "투자에 대한 이해도가 높습니다",
            "포트폴리오 분산을 통해 위험을 관리하세요",
        ])
    } else if score >= ADEQUATE_FLOOR {
        collect(&[
            "투자 경험을 쌓아가는 단계입니다",
            "소액으로 다양한 투자 경험을 쌓으세요",
        ])
    } else {
        collect(&[
            "투자 학습이 필요합니다",
            "재무 서적이나 강의로 기초 지식을 쌓으세요",
        ])
    };

    let animal_lines: [&str; 2] = match animal {
        AnimalType::Pig => [
            "고위험 투자 비중을 50% 이하로 제한하세요",
            "레버리지 상품은 신중하게 접근하세요",
        ],
        AnimalType::Bull => [
            "주식형 펀드나 ETF 투자가 적합합니다",
            "시장 변동성에 대비한 장기 투자 전략을 세우세요",
        ],
        AnimalType::Lion => [
            "주식 60% / 채권 40% 비율로 시작해보세요",
            "정기적인 리밸런싱으로 균형을 유지하세요",
        ],
        AnimalType::Sheep => [
            "채권형 펀드나 배당주 중심으로 구성하세요",
            "원금보장형 ELS 상품도 고려해보세요",
        ],
        AnimalType::Turtle => [
            "정기예금, 적금으로 안전하게 시작하세요",
            "CMA 등 단기 금융상품 활용을 권장합니다",
        ],
    };
    advice.extend(animal_lines.iter().map(|line| (*line).to_string()));

    advice
}

fn risk_advice(score: u8) -> Vec<String> {
    if score >= EXCELLENT_FLOOR {
        collect(&[
            "위험 관리 의식이 매우 높습니다",
            "보험 포트폴리오를 정기적으로 점검하세요",
            "과도한 보장은 오히려 비효율적일 수 있으니 적정 수준을 유지하세요",
        ])
    } else if score >= ADEQUATE_FLOOR {
        collect(&[
            "위험 관리가 양호합니다",
            "실손보험, 종신보험, 연금보험의 3대 보험을 점검하세요",
            "중복 보장은 없는지 확인하고 정리하세요",
        ])
    } else {
        collect(&[
            "위험 관리를 강화할 필요가 있습니다",
            "우선 실손의료보험부터 가입하세요",
            "가족의 생계를 책임진다면 정기보험을 고려하세요",
            "보험료는 월 소득의 10%를 초과하지 않도록 하세요",
        ])
    }
}
