use lazy_static::lazy_static;
use std::collections::HashMap;
use super::FormatRule;

const NANP: FormatRule = FormatRule::plain("(###) ###-####");

lazy_static! {
    static ref RULES: HashMap<&'static str, FormatRule> = {
        let mut rules = HashMap::new();

        for iso in ["US", "CA", "BS", "BB", "DO", "JM", "PR", "TT"] {
            rules.insert(iso, NANP);
        }

        rules.insert("RU", FormatRule::with_trunk("### ###-##-##", "8", "# ### ###-##-##"));
        rules.insert("KZ", FormatRule::with_trunk("### ###-##-##", "8", "# ### ###-##-##"));
        rules.insert("EG", FormatRule::with_trunk("### ### ####", "0", "#### ### ####"));
        rules.insert("ZA", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("GR", FormatRule::plain("### ### ####"));
        rules.insert("NL", FormatRule::with_trunk("# ########", "0", "## ########"));
        rules.insert("BE", FormatRule::with_trunk("### ## ## ##", "0", "#### ## ## ##"));
        rules.insert("FR", FormatRule::with_trunk("# ## ## ## ##", "0", "## ## ## ## ##"));
        rules.insert("ES", FormatRule::plain("### ## ## ##"));
        rules.insert("IT", FormatRule::plain("### ### ####"));
        rules.insert("CH", FormatRule::with_trunk("## ### ## ##", "0", "### ### ## ##"));
        rules.insert("GB", FormatRule::with_trunk("#### ######", "0", "##### ######"));
        rules.insert("DK", FormatRule::plain("## ## ## ##"));
        rules.insert("SE", FormatRule::with_trunk("## ### ## ##", "0", "### ### ## ##"));
        rules.insert("NO", FormatRule::plain("### ## ###"));
        rules.insert("PL", FormatRule::plain("### ### ###"));
        rules.insert("DE", FormatRule::with_trunk("### ########", "0", "#### ########"));
        rules.insert("PE", FormatRule::plain("### ### ###"));
        rules.insert("MX", FormatRule::plain("## #### ####"));
        rules.insert("AR", FormatRule::with_trunk("## ####-####", "0", "### ####-####"));
        rules.insert("BR", FormatRule::plain("## #####-####"));
        rules.insert("CL", FormatRule::plain("# #### ####"));
        rules.insert("CO", FormatRule::plain("### #######"));
        rules.insert("MY", FormatRule::with_trunk("##-#### ####", "0", "###-#### ####"));
        rules.insert("AU", FormatRule::with_trunk("### ### ###", "0", "#### ### ###"));
        rules.insert("ID", FormatRule::with_trunk("###-####-####", "0", "####-####-####"));
        rules.insert("PH", FormatRule::with_trunk("### ### ####", "0", "#### ### ####"));
        rules.insert("NZ", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("SG", FormatRule::plain("#### ####"));
        rules.insert("TH", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("JP", FormatRule::with_trunk("##-####-####", "0", "###-####-####"));
        rules.insert("KR", FormatRule::with_trunk("##-####-####", "0", "###-####-####"));
        rules.insert("VN", FormatRule::with_trunk("## ### ## ##", "0", "### ### ## ##"));
        rules.insert("CN", FormatRule::plain("### #### ####"));
        rules.insert("TR", FormatRule::with_trunk("### ### ## ##", "0", "#### ### ## ##"));
        rules.insert("IN", FormatRule::with_trunk("##### #####", "0", "###### #####"));
        rules.insert("PK", FormatRule::with_trunk("### #######", "0", "#### #######"));
        rules.insert("LK", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("NG", FormatRule::with_trunk("### ### ####", "0", "#### ### ####"));
        rules.insert("KE", FormatRule::with_trunk("### ######", "0", "#### ######"));
        rules.insert("PT", FormatRule::plain("### ### ###"));
        rules.insert("IE", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("FI", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("HK", FormatRule::plain("#### ####"));
        rules.insert("MO", FormatRule::plain("#### ####"));
        rules.insert("BD", FormatRule::with_trunk("####-######", "0", "#####-######"));
        rules.insert("TW", FormatRule::with_trunk("### ### ###", "0", "#### ### ###"));
        rules.insert("IL", FormatRule::with_trunk("##-###-####", "0", "###-###-####"));
        rules.insert("AE", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("SA", FormatRule::with_trunk("## ### ####", "0", "### ### ####"));
        rules.insert("NP", FormatRule::plain("###-#######"));

        rules
    };
}

pub fn rule_for(iso_code: &str) -> Option<&'static FormatRule> {
    RULES.get(iso_code.trim().to_ascii_uppercase().as_str())
}
