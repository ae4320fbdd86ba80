//! Static texts served by `/api/v1/consts/{id}`.

use toon_core::consts::ConstKind;

pub const COMPANY: &str = "\
運営会社

商号: 株式会社Cyber TOON
所在地: 東京都渋谷区宇田川町40-1 Abema Towers
設立: 2024年1月
事業内容: 電子コミックの配信およびオリジナル作品の企画・制作
";

pub const CONTACT: &str = "\
お問い合わせ

Cyber TOON に関するお問い合わせは、以下の窓口までご連絡ください。
回答までに数営業日いただく場合がございます。

メールアドレス: support@cybertoon.example
受付時間: 平日 10:00〜18:00
";

pub const OVERVIEW: &str = "\
Cyber TOON とは

Cyber TOON は、縦スクロールで読めるマンガを毎日無料で楽しめる配信サービスです。
人気作品からオリジナル作品まで、ランキングや特集から新しい作品に出会えます。
";

pub const QUESTION: &str = "\
よくある質問

Q. 利用料金はかかりますか？
A. 基本的な閲覧は無料でご利用いただけます。

Q. 推奨環境を教えてください。
A. 最新版の主要ブラウザでのご利用を推奨しています。

Q. 作品のリクエストはできますか？
A. お問い合わせ窓口よりご要望をお寄せください。
";

pub const TERM: &str = "\
利用規約

第1条（適用）
本規約は、株式会社Cyber TOON（以下「当社」）が提供するサービスの利用に関する条件を定めるものです。

第2条（禁止事項）
利用者は、作品の無断転載、複製、その他当社または第三者の権利を侵害する行為をしてはなりません。

第3条（免責）
当社は、サービスの中断または停止によって利用者に生じた損害について、一切の責任を負いません。
";

/// The text served for `kind`.
pub fn text(kind: ConstKind) -> &'static str {
    match kind {
        ConstKind::Company => COMPANY,
        ConstKind::Contact => CONTACT,
        ConstKind::Overview => OVERVIEW,
        ConstKind::Question => QUESTION,
        ConstKind::Term => TERM,
    }
}
