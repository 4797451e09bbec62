//! Static question/answer-option catalog for the Arune survey.
//!
//! The per-option scores and category tags here feed the transparency view
//! (`rawAnalysis.detailedScores`) only. The four category scores apply their
//! own linear transforms to raw answer values and never consult this table;
//! the two paths are deliberately kept separate.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One survey question with its enumerated answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

/// One selectable answer with its mapped score and category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
    pub score: u8,
    pub category: &'static str,
}

/// Scored lookup result for a single answer, shaped for the report's
/// detailed-scores payload. Unknown lookups collapse to the neutral result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionScore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub score: u8,
    #[serde(rename = "type")]
    pub category: String,
    pub text: String,
}

impl QuestionScore {
    fn unknown() -> Self {
        Self {
            question_id: None,
            question: None,
            score: 0,
            category: "unknown".to_string(),
            text: String::new(),
        }
    }
}

/// Score a single answer against the catalog.
///
/// Unknown question ids and invalid option values degrade to the neutral
/// zero-score result with a warning; the caller never fails.
pub fn score_for(question_id: &str, answer_value: u8) -> QuestionScore {
    let Some(question) = question(question_id) else {
        warn!(question_id, "no catalog mapping for question");
        return QuestionScore::unknown();
    };

    let Some(option) = question
        .options
        .iter()
        .find(|option| option.value == answer_value)
    else {
        warn!(question_id, answer_value, "answer value not in option set");
        return QuestionScore::unknown();
    };

    QuestionScore {
        question_id: Some(question.id.to_string()),
        question: Some(question.prompt.to_string()),
        score: option.score,
        category: option.category.to_string(),
        text: option.label.to_string(),
    }
}

/// Look up a question definition by id.
pub fn question(question_id: &str) -> Option<&'static QuestionDefinition> {
    index().get(question_id).copied()
}

/// All catalogued questions in declaration order.
pub fn questions() -> &'static [QuestionDefinition] {
    QUESTIONS
}

fn index() -> &'static BTreeMap<&'static str, &'static QuestionDefinition> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static QuestionDefinition>> = OnceLock::new();
    INDEX.get_or_init(|| {
        QUESTIONS
            .iter()
            .map(|question| (question.id, question))
            .collect()
    })
}

const fn option(
    value: u8,
    label: &'static str,
    score: u8,
    category: &'static str,
) -> AnswerOption {
    AnswerOption {
        value,
        label,
        score,
        category,
    }
}

static QUESTIONS: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "FB01-3",
        prompt: "당신이 투자관련 의사결정을 할 때, 가장 민감하게 생각하는 것은 무엇인가요?",
        options: &[
            option(1, "손실가능성", 1, "손실"),
            option(2, "유동성 제약", 2, "유동성"),
            option(3, "수수료(비용)", 3, "비용"),
            option(4, "세금", 4, "세금"),
            option(5, "물가상승률", 5, "물가"),
        ],
    },
    QuestionDefinition {
        id: "FB02-1",
        prompt: "내가 보험으로 보장받고 싶은 위험요소는 무엇인가요?",
        options: &[
            option(1, "사망위험", 1, "사망"),
            option(2, "실손의료비", 2, "의료"),
            option(3, "간병치료", 3, "간병"),
            option(4, "3대질환", 4, "큰병"),
        ],
    },
    QuestionDefinition {
        id: "FB05-1",
        prompt: "1년 후 다음과 같은 손실-수익 가능성을 가진 투자가 있다면, 당신의 선택은?",
        options: &[
            option(1, "최소1% 최대4%", 1, "안전"),
            option(2, "최소-5% 최대8%", 2, "보통"),
            option(3, "최소-10% 최대15%", 3, "적극"),
            option(4, "최소-30% 최대50%", 4, "고위험"),
        ],
    },
    QuestionDefinition {
        id: "FB05-3",
        prompt: "목표 수익을 얻기 위해 가장 선호하는 투자수단은 무엇인가요?",
        options: &[
            option(1, "주식/채권", 1, "직접투자"),
            option(2, "펀드/ELS", 2, "간접투자"),
            option(3, "변액보험", 3, "보험형"),
            option(4, "파생상품", 4, "파생"),
            option(5, "대안투자", 5, "대안"),
        ],
    },
    QuestionDefinition {
        id: "FB16-2",
        prompt: "증시가 하락해 투자의 가치가 20% 하락했다면 어떻게 할 것인가요?",
        options: &[
            option(1, "모든 주식을 판 뒤 MMF로 옮긴다", 1, "회피"),
            option(2, "일부를 팔아 추가 손실을 피한다", 2, "방어"),
            option(3, "추가 자금 없이 시장 반등을 기다린다", 3, "보유"),
            option(4, "현 가격이 매력적이라 보고 주식을 더 산다", 4, "공격"),
        ],
    },
    QuestionDefinition {
        id: "FB21-1",
        prompt: "위험을 회피하는 수단으로 보험과 저축 중 어느 것을 더 선호하십니까?",
        options: &[
            option(1, "보험", 1, "보험"),
            option(2, "저축(충당금)", 2, "저축"),
        ],
    },
    QuestionDefinition {
        id: "FB09-3",
        prompt: "투자 관련 정보를 얻는 주된 경로나 수단은 무엇인가요?",
        options: &[
            option(1, "주변지인", 1, "주변지인"),
            option(2, "광고", 2, "광고"),
            option(3, "언론매체", 3, "언론매체"),
            option(4, "인터넷", 4, "인터넷"),
            option(5, "금융전문가", 5, "전문가"),
            option(6, "금융서적", 4, "서적"),
            option(7, "재테크강의", 4, "강의"),
        ],
    },
    QuestionDefinition {
        id: "FB11-3",
        prompt: "현재 보유하고 있는 보험상품에 대하여 당신은 어떻게 생각하세요?",
        options: &[
            option(1, "과도하다", 1, "과도"),
            option(2, "적당하다", 2, "적정"),
            option(3, "부족하다", 3, "부족"),
        ],
    },
    QuestionDefinition {
        id: "FB12-1",
        prompt: "보장성 보험 가입 시 고려하는 우선 순위는 무엇인가요?",
        options: &[
            option(1, "보험료", 1, "보험료"),
            option(2, "납입기간", 2, "납입기간"),
            option(3, "보장기간", 3, "보장기간"),
            option(4, "환급금", 4, "환급금"),
            option(5, "보장내용", 5, "보장내용"),
            option(6, "보험금", 4, "보험금"),
            option(7, "브랜드(안정성)", 3, "브랜드"),
        ],
    },
    QuestionDefinition {
        id: "FB17-1",
        prompt: "다음 중 가족력이 의심되는 질병이 있습니까?",
        options: &[
            option(1, "암", 4, "암가족력"),
            option(2, "뇌/심장혈관", 3, "뇌심장가족력"),
            option(3, "당뇨/고혈압", 3, "당뇨고혈압가족력"),
            option(4, "치매", 2, "치매가족력"),
            option(5, "없다", 1, "가족력없음"),
            option(6, "기타", 2, "기타가족력"),
        ],
    },
    QuestionDefinition {
        id: "FB22-3",
        prompt: "현재 가입 중이거나 가입하려는 투자상품 중 가장 높은 수익이 기대되는 것은 무엇인가요?",
        options: &[
            option(1, "주식/채권", 4, "직접투자기대"),
            option(2, "펀드/ELS", 3, "간접투자기대"),
            option(3, "변액보험", 2, "보험투자기대"),
            option(4, "파생상품(선물/옵션)", 5, "파생투자기대"),
            option(5, "대안투자", 4, "대안투자기대"),
            option(6, "계", 1, "저축기대"),
            option(7, "없음", 1, "투자없음"),
        ],
    },
    QuestionDefinition {
        id: "ST02-01",
        prompt: "소득안에서 지출하는 편인가요?",
        options: &[
            option(1, "그렇다", 1, "절약형"),
            option(2, "거의그렇다", 2, "보통관리"),
            option(3, "아니다", 3, "소비형"),
            option(4, "전혀아니다", 4, "과소비형"),
        ],
    },
    QuestionDefinition {
        id: "ST02-02",
        prompt: "돈을 모으는 방법으로 가장 선호하는 것은 무엇인가요?",
        options: &[
            option(1, "예적금", 1, "안전저축"),
            option(2, "투자상품", 4, "적극투자"),
            option(3, "보험상품", 2, "보험저축"),
            option(4, "부동산", 3, "실물투자"),
        ],
    },
    QuestionDefinition {
        id: "ST02-06",
        prompt: "지출이 소득을 초과하게 되면 어떻게 대처를 하실건가요?",
        options: &[
            option(1, "마이너스통장", 2, "단기대출"),
            option(2, "대출활용", 4, "적극대출"),
            option(3, "상여금활용", 1, "계획적관리"),
            option(4, "지출줄이기", 1, "절약형"),
        ],
    },
    QuestionDefinition {
        id: "ST02-07",
        prompt: "다음 중 가장 아낌없이 쓸 수 있는 지출항목은 무엇인가요?",
        options: &[
            option(1, "여행", 3, "경험소비"),
            option(2, "외식", 2, "일상소비"),
            option(3, "문화생활비", 3, "문화소비"),
            option(4, "교육비", 1, "투자소비"),
        ],
    },
    QuestionDefinition {
        id: "ST02-08",
        prompt: "가계형편이 어려워지면 가장 먼저 줄이고 싶은 지출항목은 무엇인가요?",
        options: &[
            option(1, "여행", 1, "합리적절약"),
            option(2, "외식", 1, "합리적절약"),
            option(3, "문화생활비", 2, "선택적절약"),
            option(4, "교육비", 4, "과도한절약"),
        ],
    },
    QuestionDefinition {
        id: "ST02-10",
        prompt: "정기적으로 저축하는 것을 선호하는 편인가요?",
        options: &[
            option(1, "그렇다", 1, "계획저축"),
            option(2, "아니다", 3, "자유저축"),
        ],
    },
    QuestionDefinition {
        id: "ST02-13",
        prompt: "가계부를 적으시나요?",
        options: &[
            option(1, "그렇다", 1, "체계적관리"),
            option(2, "아니다", 3, "자유관리"),
        ],
    },
    QuestionDefinition {
        id: "ST02-14",
        prompt: "지금 당장 은퇴 준비가 필요하다고 생각합니까?",
        options: &[
            option(1, "예", 1, "미래계획형"),
            option(2, "아니오", 3, "현재중심형"),
        ],
    },
    QuestionDefinition {
        id: "ST02-18",
        prompt: "매월 정기적으로 지출되는 생활비, 교육비, 용돈, 보험료, 이자 등이 얼마인지 알고 있습니까?",
        options: &[
            option(1, "정확히 안다", 1, "정확관리"),
            option(2, "대략 안다", 2, "대략관리"),
            option(3, "잘 모른다", 4, "무관리"),
        ],
    },
    QuestionDefinition {
        id: "ST02-29",
        prompt: "내가 거래하는 금융회사(은행, 증권, 보험)의 수는 몇 개인가요?",
        options: &[
            option(1, "1-2개", 1, "단순관리"),
            option(2, "3-5개", 2, "보통관리"),
            option(3, "6-10개", 3, "다양관리"),
            option(4, "10개 이상", 4, "복잡관리"),
        ],
    },
    QuestionDefinition {
        id: "ST02-32",
        prompt: "장보러 갈 때 미리 세운 계획에 따라 구입하는 편인가요?",
        options: &[
            option(1, "그렇다", 1, "계획소비"),
            option(2, "아니다", 3, "충동소비"),
        ],
    },
    QuestionDefinition {
        id: "ST02-40",
        prompt: "현재 퇴직금 또는 퇴직연금에 가입되어 있습니까?",
        options: &[
            option(1, "퇴직금", 2, "기본보장"),
            option(2, "퇴직연금(DC형)", 1, "적극연금"),
            option(3, "퇴직연금(DB형)", 1, "안정연금"),
            option(4, "해당없음", 4, "무보장"),
        ],
    },
    QuestionDefinition {
        id: "ST02-42",
        prompt: "금융, 재테크 관련 정보에 관심이 많은 편인가요?",
        options: &[
            option(1, "매우 그렇다", 1, "적극관심"),
            option(2, "그렇다", 2, "보통관심"),
            option(3, "보통이다", 3, "소극관심"),
            option(4, "관심없다", 4, "무관심"),
        ],
    },
    QuestionDefinition {
        id: "ST02-51",
        prompt: "본인이나 가족 중에 암, 뇌졸중, 심근경색 등 중대질병 병력이 있습니까?",
        options: &[
            option(1, "본인", 5, "본인병력"),
            option(2, "가족", 3, "가족병력"),
            option(3, "둘다", 4, "높은위험"),
            option(4, "없음", 1, "낮은위험"),
        ],
    },
    QuestionDefinition {
        id: "ST02-56",
        prompt: "앞으로 가장 중요하게 생각하는 재무목표는 무엇인가요?",
        options: &[
            option(1, "내집마련", 3, "주택목표"),
            option(2, "자녀교육", 2, "교육목표"),
            option(3, "은퇴준비", 1, "은퇴목표"),
            option(4, "여가생활", 4, "여가목표"),
        ],
    },
];
