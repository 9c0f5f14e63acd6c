use crate::model::{OPTION_COUNT, Question};

/// Read-only source of quiz questions grouped by category.
pub trait QuestionSource: Send + Sync {
    /// Category names in display order.
    fn categories(&self) -> Vec<String>;

    /// Questions for `category` in quiz order; empty for unknown categories.
    fn questions(&self, category: &str) -> Vec<Question>;
}

struct Seed {
    text: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct_index: usize,
}

const fn seed(
    text: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct_index: usize,
) -> Seed {
    Seed {
        text,
        options,
        correct_index,
    }
}

const BANK: &[(&str, &[Seed])] = &[
    (
        "역사",
        &[
            seed("한글을 창제한 왕은?", ["세종", "세조", "성종", "문종"], 0),
            seed(
                "세계 2차 대전이 끝난 연도는?",
                ["1939년", "1941년", "1945년", "1949년"],
                2,
            ),
            seed("3·1 운동이 일어난 해는?", ["1910", "1915", "1919", "1925"], 2),
            seed(
                "나라 외교권 빼앗은 인물은?",
                ["이토 히로부미", "고토 쇼지로", "고바야카와", "스티븐스"],
                0,
            ),
            seed("임시정부 초대 대통령은?", ["윤봉길", "이승만", "김구", "안창호"], 1),
        ],
    ),
    (
        "상식",
        &[
            seed(
                "지구 대기 중 가장 많은 기체는?",
                ["산소", "질소", "아르곤", "이산화탄소"],
                1,
            ),
            seed("포유류가 아닌 것은?", ["돌고래", "박쥐", "펭귄", "고래"], 2),
            seed("한국 국제전화번호는?", ["+81", "+86", "+82", "+80"], 2),
            seed(
                "제주도 삼다에 해당 안되는 것은?",
                ["여자", "돌", "바람", "해산물"],
                3,
            ),
            seed("캐나다 수도는?", ["토론토", "밴쿠버", "오타와", "몬트리올"], 2),
        ],
    ),
    (
        "과학",
        &[
            seed("물의 화학식은?", ["H₂", "H₂O", "O₂", "NaCl"], 1),
            seed("태양계에서 가장 큰 행성은?", ["지구", "목성", "토성", "화성"], 1),
            seed("원자 번호 1번은?", ["산소", "헬륨", "수소", "탄소"], 2),
            seed(
                "빛의 속도는?",
                ["300km/s", "300,000km/s", "30,000km/s", "3,000km/s"],
                1,
            ),
            seed("인간 DNA는 몇 쌍?", ["23쌍", "46쌍", "12쌍", "92쌍"], 0),
        ],
    ),
    (
        "영화",
        &[
            seed("'기생충' 감독은?", ["봉준호", "박찬욱", "김기덕", "최동훈"], 0),
            seed(
                "'겨울왕국' 엘사 여동생은?",
                ["안나", "올라프", "크리스토프", "마시멜로우"],
                0,
            ),
            seed(
                "아이언맨 배우는?",
                ["로버트 다우니 주니어", "크리스 에반스", "헴스워스", "톰 홀랜드"],
                0,
            ),
            seed("한국 최고 관객 영화는?", ["명량", "신과함께", "극한직업", "기생충"], 0),
            seed(
                "애니메이션 아닌 것은?",
                ["겨울왕국", "인사이드 아웃", "명량", "라이온킹"],
                2,
            ),
        ],
    ),
];

/// The compiled-in question bank: four categories, five questions each.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionBank;

impl QuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl QuestionSource for QuestionBank {
    fn categories(&self) -> Vec<String> {
        BANK.iter().map(|(name, _)| (*name).to_string()).collect()
    }

    fn questions(&self, category: &str) -> Vec<Question> {
        let Some((_, seeds)) = BANK.iter().find(|(name, _)| *name == category) else {
            return Vec::new();
        };

        // Seeds are checked by `every_seed_is_a_valid_question`.
        seeds
            .iter()
            .filter_map(|s| {
                Question::new(
                    s.text,
                    s.options.iter().map(|o| (*o).to_string()).collect(),
                    s.correct_index,
                )
                .ok()
            })
            .collect()
    }
}
