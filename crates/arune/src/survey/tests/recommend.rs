use crate::survey::analysis::{recommendations, AnimalType, CategoryScores};

fn scores(spending: u8, saving: u8, investment: u8, risk: u8) -> CategoryScores {
    CategoryScores {
        spending,
        saving,
        investment,
        risk_management: risk,
        total: u16::from(spending) + u16::from(saving) + u16::from(investment) + u16::from(risk),
    }
}

#[test]
fn high_scores_select_the_excellent_tier() {
    let advice = recommendations(&scores(80, 90, 75, 100), AnimalType::Pig);

    assert_eq!(advice.spending[0], "지출 관리가 매우 우수합니다");
    assert_eq!(advice.saving[0], "저축 습관이 매우 좋습니다");
    assert_eq!(advice.investment[0], "투자에 대한 이해도가 높습니다");
    assert_eq!(advice.risk[0], "위험 관리 의식이 매우 높습니다");
    assert_eq!(advice.spending.len(), 3);
    assert_eq!(advice.risk.len(), 3);
}

#[test]
fn tier_floors_are_inclusive() {
    let at_excellent = recommendations(&scores(75, 75, 75, 75), AnimalType::Lion);
    assert_eq!(at_excellent.spending[0], "지출 관리가 매우 우수합니다");

    let below_excellent = recommendations(&scores(74, 74, 74, 74), AnimalType::Lion);
    assert_eq!(below_excellent.spending[0], "지출 관리가 양호한 편입니다");

    let at_adequate = recommendations(&scores(50, 50, 50, 50), AnimalType::Lion);
    assert_eq!(at_adequate.saving[0], "저축 습관이 양호합니다");

    let below_adequate = recommendations(&scores(49, 49, 49, 49), AnimalType::Lion);
    assert_eq!(below_adequate.saving[0], "저축 습관을 개선할 필요가 있습니다");
}

#[test]
fn weak_categories_get_the_longer_improvement_lists() {
    let advice = recommendations(&scores(10, 20, 30, 40), AnimalType::Turtle);

    assert_eq!(advice.spending.len(), 4);
    assert_eq!(advice.saving.len(), 4);
    assert_eq!(advice.risk.len(), 4);
}

#[test]
fn investment_advice_appends_animal_specific_lines() {
    let lion = recommendations(&scores(50, 50, 60, 50), AnimalType::Lion);
    assert_eq!(lion.investment.len(), 4);
    assert!(lion
        .investment
        .contains(&"주식 60% / 채권 40% 비율로 시작해보세요".to_string()));

    let turtle = recommendations(&scores(50, 50, 60, 50), AnimalType::Turtle);
    assert_eq!(turtle.investment.len(), 4);
    assert!(turtle
        .investment
        .contains(&"정기예금, 적금으로 안전하게 시작하세요".to_string()));

    // Score tier is shared; only the trailing pair differs by type.
    assert_eq!(lion.investment[..2], turtle.investment[..2]);
}
