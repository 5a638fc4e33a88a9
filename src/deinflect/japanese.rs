// Japanese conjugation table.
//
// Overgenerates on purpose: candidates that are not real words are filtered
// out later when the lexicon has no entry for them. Order matters, earlier
// rules win when two rules produce the same candidate.

use super::VerbClass::{Godan, IAdjective, Ichidan, Kuru, Suru};
use super::{rule, DeinflectionRule};

pub const JAPANESE_RULES: &[DeinflectionRule] = &[
    // Ichidan verbs: 食べる, 見る
    rule("ます", "る", "polite", Ichidan),
    rule("ました", "る", "polite-past", Ichidan),
    rule("ません", "る", "polite-negative", Ichidan),
    rule("ませんでした", "る", "polite-past-negative", Ichidan),
    rule("ない", "る", "negative", Ichidan),
    rule("なかった", "る", "past-negative", Ichidan),
    rule("た", "る", "past", Ichidan),
    rule("て", "る", "te-form", Ichidan),
    rule("ている", "る", "progressive", Ichidan),
    rule("ています", "る", "polite-progressive", Ichidan),
    rule("られる", "る", "potential", Ichidan),
    rule("れる", "る", "potential", Ichidan),
    rule("させる", "る", "causative", Ichidan),
    rule("ろ", "る", "imperative", Ichidan),
    rule("よう", "る", "volitional", Ichidan),
    rule("たい", "る", "desiderative", Ichidan),
    rule("れば", "る", "conditional", Ichidan),
    // Godan verbs ending in う
    rule("います", "う", "polite", Godan),
    rule("いました", "う", "polite-past", Godan),
    rule("いません", "う", "polite-negative", Godan),
    rule("いませんでした", "う", "polite-past-negative", Godan),
    rule("わない", "う", "negative", Godan),
    rule("わなかった", "う", "past-negative", Godan),
    rule("った", "う", "past", Godan),
    rule("って", "う", "te-form", Godan),
    rule("っている", "う", "progressive", Godan),
    rule("っています", "う", "polite-progressive", Godan),
    rule("える", "う", "potential", Godan),
    rule("われる", "う", "passive", Godan),
    rule("わせる", "う", "causative", Godan),
    rule("え", "う", "imperative", Godan),
    rule("おう", "う", "volitional", Godan),
    rule("いたい", "う", "desiderative", Godan),
    rule("えば", "う", "conditional", Godan),
    rule("い", "う", "stem", Godan),
    // Godan verbs ending in く
    rule("きます", "く", "polite", Godan),
    rule("きました", "く", "polite-past", Godan),
    rule("きません", "く", "polite-negative", Godan),
    rule("きませんでした", "く", "polite-past-negative", Godan),
    rule("かない", "く", "negative", Godan),
    rule("かなかった", "く", "past-negative", Godan),
    rule("いた", "く", "past", Godan),
    rule("いて", "く", "te-form", Godan),
    rule("いている", "く", "progressive", Godan),
    rule("いています", "く", "polite-progressive", Godan),
    rule("ける", "く", "potential", Godan),
    rule("かれる", "く", "passive", Godan),
    rule("かせる", "く", "causative", Godan),
    rule("け", "く", "imperative", Godan),
    rule("こう", "く", "volitional", Godan),
    rule("きたい", "く", "desiderative", Godan),
    rule("けば", "く", "conditional", Godan),
    rule("き", "く", "stem", Godan),
    // Godan verbs ending in ぐ
    rule("ぎます", "ぐ", "polite", Godan),
    rule("ぎました", "ぐ", "polite-past", Godan),
    rule("ぎません", "ぐ", "polite-negative", Godan),
    rule("ぎませんでした", "ぐ", "polite-past-negative", Godan),
    rule("がない", "ぐ", "negative", Godan),
    rule("がなかった", "ぐ", "past-negative", Godan),
    rule("いだ", "ぐ", "past", Godan),
    rule("いで", "ぐ", "te-form", Godan),
    rule("いでいる", "ぐ", "progressive", Godan),
    rule("いでいます", "ぐ", "polite-progressive", Godan),
    rule("げる", "ぐ", "potential", Godan),
    rule("がれる", "ぐ", "passive", Godan),
    rule("がせる", "ぐ", "causative", Godan),
    rule("げ", "ぐ", "imperative", Godan),
    rule("ごう", "ぐ", "volitional", Godan),
    rule("ぎたい", "ぐ", "desiderative", Godan),
    rule("げば", "ぐ", "conditional", Godan),
    rule("ぎ", "ぐ", "stem", Godan),
    // Godan verbs ending in す
    rule("します", "す", "polite", Godan),
    rule("しました", "す", "polite-past", Godan),
    rule("しません", "す", "polite-negative", Godan),
    rule("しませんでした", "す", "polite-past-negative", Godan),
    rule("さない", "す", "negative", Godan),
    rule("さなかった", "す", "past-negative", Godan),
    rule("した", "す", "past", Godan),
    rule("して", "す", "te-form", Godan),
    rule("している", "す", "progressive", Godan),
    rule("しています", "す", "polite-progressive", Godan),
    rule("せる", "す", "potential", Godan),
    rule("される", "す", "passive", Godan),
    rule("させる", "す", "causative", Godan),
    rule("せ", "す", "imperative", Godan),
    rule("そう", "す", "volitional", Godan),
    rule("したい", "す", "desiderative", Godan),
    rule("せば", "す", "conditional", Godan),
    rule("し", "す", "stem", Godan),
    // Godan verbs ending in つ
    rule("ちます", "つ", "polite", Godan),
    rule("ちました", "つ", "polite-past", Godan),
    rule("ちません", "つ", "polite-negative", Godan),
    rule("ちませんでした", "つ", "polite-past-negative", Godan),
    rule("たない", "つ", "negative", Godan),
    rule("たなかった", "つ", "past-negative", Godan),
    rule("った", "つ", "past", Godan),
    rule("って", "つ", "te-form", Godan),
    rule("っている", "つ", "progressive", Godan),
    rule("っています", "つ", "polite-progressive", Godan),
    rule("てる", "つ", "potential", Godan),
    rule("たれる", "つ", "passive", Godan),
    rule("たせる", "つ", "causative", Godan),
    rule("て", "つ", "imperative", Godan),
    rule("とう", "つ", "volitional", Godan),
    rule("ちたい", "つ", "desiderative", Godan),
    rule("てば", "つ", "conditional", Godan),
    rule("ち", "つ", "stem", Godan),
    // Godan verbs ending in ぬ
    rule("にます", "ぬ", "polite", Godan),
    rule("にました", "ぬ", "polite-past", Godan),
    rule("にません", "ぬ", "polite-negative", Godan),
    rule("にませんでした", "ぬ", "polite-past-negative", Godan),
    rule("なない", "ぬ", "negative", Godan),
    rule("ななかった", "ぬ", "past-negative", Godan),
    rule("んだ", "ぬ", "past", Godan),
    rule("んで", "ぬ", "te-form", Godan),
    rule("んでいる", "ぬ", "progressive", Godan),
    rule("んでいます", "ぬ", "polite-progressive", Godan),
    rule("ねる", "ぬ", "potential", Godan),
    rule("なれる", "ぬ", "passive", Godan),
    rule("なせる", "ぬ", "causative", Godan),
    rule("ね", "ぬ", "imperative", Godan),
    rule("のう", "ぬ", "volitional", Godan),
    rule("にたい", "ぬ", "desiderative", Godan),
    rule("ねば", "ぬ", "conditional", Godan),
    rule("に", "ぬ", "stem", Godan),
    // Godan verbs ending in ぶ
    rule("びます", "ぶ", "polite", Godan),
    rule("びました", "ぶ", "polite-past", Godan),
    rule("びません", "ぶ", "polite-negative", Godan),
    rule("びませんでした", "ぶ", "polite-past-negative", Godan),
    rule("ばない", "ぶ", "negative", Godan),
    rule("ばなかった", "ぶ", "past-negative", Godan),
    rule("んだ", "ぶ", "past", Godan),
    rule("んで", "ぶ", "te-form", Godan),
    rule("んでいる", "ぶ", "progressive", Godan),
    rule("んでいます", "ぶ", "polite-progressive", Godan),
    rule("べる", "ぶ", "potential", Godan),
    rule("ばれる", "ぶ", "passive", Godan),
    rule("ばせる", "ぶ", "causative", Godan),
    rule("べ", "ぶ", "imperative", Godan),
    rule("ぼう", "ぶ", "volitional", Godan),
    rule("びたい", "ぶ", "desiderative", Godan),
    rule("べば", "ぶ", "conditional", Godan),
    rule("び", "ぶ", "stem", Godan),
    // Godan verbs ending in む
    rule("みます", "む", "polite", Godan),
    rule("みました", "む", "polite-past", Godan),
    rule("みません", "む", "polite-negative", Godan),
    rule("みませんでした", "む", "polite-past-negative", Godan),
    rule("まない", "む", "negative", Godan),
    rule("まなかった", "む", "past-negative", Godan),
    rule("んだ", "む", "past", Godan),
    rule("んで", "む", "te-form", Godan),
    rule("んでいる", "む", "progressive", Godan),
    rule("んでいます", "む", "polite-progressive", Godan),
    rule("める", "む", "potential", Godan),
    rule("まれる", "む", "passive", Godan),
    rule("ませる", "む", "causative", Godan),
    rule("め", "む", "imperative", Godan),
    rule("もう", "む", "volitional", Godan),
    rule("みたい", "む", "desiderative", Godan),
    rule("めば", "む", "conditional", Godan),
    rule("み", "む", "stem", Godan),
    // Godan verbs ending in る
    rule("ります", "る", "polite", Godan),
    rule("りました", "る", "polite-past", Godan),
    rule("りません", "る", "polite-negative", Godan),
    rule("りませんでした", "る", "polite-past-negative", Godan),
    rule("らない", "る", "negative", Godan),
    rule("らなかった", "る", "past-negative", Godan),
    rule("った", "る", "past", Godan),
    rule("って", "る", "te-form", Godan),
    rule("っている", "る", "progressive", Godan),
    rule("っています", "る", "polite-progressive", Godan),
    rule("れる", "る", "potential", Godan),
    rule("られる", "る", "passive", Godan),
    rule("らせる", "る", "causative", Godan),
    rule("れ", "る", "imperative", Godan),
    rule("ろう", "る", "volitional", Godan),
    rule("りたい", "る", "desiderative", Godan),
    rule("れば", "る", "conditional", Godan),
    rule("り", "る", "stem", Godan),
    // 行く takes って/った instead of いて/いた
    rule("行って", "行く", "te-form", Godan),
    rule("行った", "行く", "past", Godan),
    rule("いって", "いく", "te-form", Godan),
    rule("いった", "いく", "past", Godan),
    // I-adjectives: 高い
    rule("かった", "い", "past", IAdjective),
    rule("くない", "い", "negative", IAdjective),
    rule("くなかった", "い", "past-negative", IAdjective),
    rule("くて", "い", "te-form", IAdjective),
    rule("く", "い", "adverbial", IAdjective),
    rule("ければ", "い", "conditional", IAdjective),
    rule("さ", "い", "nominal", IAdjective),
    rule("そう", "い", "appearance", IAdjective),
    // Irregular: する
    rule("します", "する", "polite", Suru),
    rule("しました", "する", "polite-past", Suru),
    rule("しません", "する", "polite-negative", Suru),
    rule("しませんでした", "する", "polite-past-negative", Suru),
    rule("しない", "する", "negative", Suru),
    rule("しなかった", "する", "past-negative", Suru),
    rule("した", "する", "past", Suru),
    rule("して", "する", "te-form", Suru),
    rule("している", "する", "progressive", Suru),
    rule("しています", "する", "polite-progressive", Suru),
    rule("できる", "する", "potential", Suru),
    rule("される", "する", "passive", Suru),
    rule("させる", "する", "causative", Suru),
    rule("しろ", "する", "imperative", Suru),
    rule("せよ", "する", "imperative", Suru),
    rule("しよう", "する", "volitional", Suru),
    rule("したい", "する", "desiderative", Suru),
    rule("すれば", "する", "conditional", Suru),
    rule("し", "する", "stem", Suru),
    // Irregular: 来る, in kanji and kana
    rule("来ます", "来る", "polite", Kuru),
    rule("来ました", "来る", "polite-past", Kuru),
    rule("来ません", "来る", "polite-negative", Kuru),
    rule("来ない", "来る", "negative", Kuru),
    rule("来なかった", "来る", "past-negative", Kuru),
    rule("来た", "来る", "past", Kuru),
    rule("来て", "来る", "te-form", Kuru),
    rule("来ている", "来る", "progressive", Kuru),
    rule("来られる", "来る", "potential", Kuru),
    rule("来させる", "来る", "causative", Kuru),
    rule("来い", "来る", "imperative", Kuru),
    rule("来よう", "来る", "volitional", Kuru),
    rule("来たい", "来る", "desiderative", Kuru),
    rule("来れば", "来る", "conditional", Kuru),
    rule("きます", "くる", "polite", Kuru),
    rule("きました", "くる", "polite-past", Kuru),
    rule("きません", "くる", "polite-negative", Kuru),
    rule("こない", "くる", "negative", Kuru),
    rule("こなかった", "くる", "past-negative", Kuru),
    rule("きた", "くる", "past", Kuru),
    rule("きて", "くる", "te-form", Kuru),
    rule("きている", "くる", "progressive", Kuru),
    rule("こられる", "くる", "potential", Kuru),
    rule("こさせる", "くる", "causative", Kuru),
    rule("こい", "くる", "imperative", Kuru),
    rule("こよう", "くる", "volitional", Kuru),
    rule("きたい", "くる", "desiderative", Kuru),
    rule("くれば", "くる", "conditional", Kuru),
];

#[cfg(test)]
#[path = "japanese_test.rs"]
mod tests;
