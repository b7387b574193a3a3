//! Topic routing and answer templates for the template advisor's chat mode.
//!
//! A question is lower-cased and matched against an ordered list of keyword
//! groups; the first hit wins. Matching is plain substring search, so
//! "investment coach" lands on `Invest` because "invest" is checked first.

use crate::advisor::extract::PromptFacts;
use crate::coach::projection::project_at_65;
use crate::format::{grouped, grouped_round, round1};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    EmergencyFund,
    Retirement,
    Debt,
    Invest,
    Budget,
    Benefits,
    Car,
    Housing { buying: bool },
    Saving,
    Taxes,
    AccountOpening,
    InvestmentCoach,
    Broker,
    Ira,
    Features,
    /// Unrecognised but about money.
    MoneyGeneral,
    OffTopic,
}

/// Ordered keyword groups. Earlier rows take precedence.
const ROUTES: &[(&[&str], Topic)] = &[
    (&["emergency fund"], Topic::EmergencyFund),
    (&["401k", "retirement"], Topic::Retirement),
    (&["debt", "loan"], Topic::Debt),
    (&["invest", "portfolio"], Topic::Invest),
    (&["budget", "expense"], Topic::Budget),
    (&["insurance", "benefit"], Topic::Benefits),
    (&["car", "vehicle", "auto"], Topic::Car),
    (
        &["house", "home", "mortgage", "rent"],
        Topic::Housing { buying: false },
    ),
    (&["save", "saving"], Topic::Saving),
    (&["tax", "w-4", "withholding"], Topic::Taxes),
    (
        &["account opening", "open account", "brokerage", "open brokerage"],
        Topic::AccountOpening,
    ),
    (
        &["investment coach", "etf", "which stock", "what to invest"],
        Topic::InvestmentCoach,
    ),
    (
        &["broker", "principal", "vanguard", "fidelity"],
        Topic::Broker,
    ),
    (
        &["roth ira", "traditional ira", "ira", "account type"],
        Topic::Ira,
    ),
    (&["feature", "new", "platform"], Topic::Features),
];

const BUYING_WORDS: &[&str] = &["buy", "house", "home", "mortgage"];
const MONEY_WORDS: &[&str] = &["money", "pay", "afford", "cost", "price", "spend"];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

pub fn classify(question: &str) -> Topic {
    let q = question.to_lowercase();
    for (words, topic) in ROUTES {
        if contains_any(&q, words) {
            return match topic {
                Topic::Housing { .. } => Topic::Housing {
                    buying: contains_any(&q, BUYING_WORDS),
                },
                other => *other,
            };
        }
    }
    if contains_any(&q, MONEY_WORDS) {
        Topic::MoneyGeneral
    } else {
        Topic::OffTopic
    }
}

/// Whole months needed to cover `amount` at `per_month`, never negative.
/// `None` when the monthly figure cannot make progress.
pub fn ceil_months(amount: f64, per_month: f64) -> Option<i64> {
    if per_month.is_nan() || per_month <= 0.0 || !amount.is_finite() {
        return None;
    }
    Some((amount / per_month).ceil().max(0.0) as i64)
}

fn months_text(months: Option<i64>) -> String {
    months.map_or_else(|| "many".to_string(), |m| m.to_string())
}

/// Renders the answer for `question` using the user's figures.
pub fn respond(facts: &PromptFacts, question: &str) -> String {
    let f = facts;
    let name = f.name.as_str();
    let age = f.age;
    let income = grouped(f.monthly_income);
    let expenses = grouped(f.monthly_expenses);
    let surplus = grouped(f.monthly_surplus);
    let rate = format!("{:.1}", f.savings_rate);
    let invest_monthly = grouped_round(f.monthly_surplus * 0.3);

    let coverage = if f.monthly_expenses > 0.0 {
        f.current_savings / f.monthly_expenses
    } else {
        0.0
    };
    let coverage_text = if f.monthly_expenses > 0.0 {
        format!("{coverage:.1}")
    } else {
        "0".to_string()
    };

    match classify(question) {
        Topic::EmergencyFund => {
            let target = f.monthly_expenses * 6.0;
            let contribution = (f.monthly_surplus * 0.3).min(500.0);
            // compared at the precision it is shown with
            let progress = if round1(coverage) >= 3.0 {
                "you're off to a good start"
            } else {
                "let's work on building this up"
            };
            let months = months_text(ceil_months(target - f.current_savings, contribution));
            format!(
                "Great question about emergency funds, {name}! Based on your monthly expenses of \
                 ${expenses}, I recommend building an emergency fund of ${target} (6 months of \
                 expenses). You currently have ${savings} saved, which covers about \
                 {coverage_text} months - {progress}! With your monthly surplus of ${surplus}, \
                 try setting aside ${contribution}/month automatically. At that rate, you'll have \
                 a full 6-month cushion in about {months} months. Keep this in a high-yield \
                 savings account where it's accessible but separate from your checking.",
                target = grouped(target),
                savings = grouped(f.current_savings),
                contribution = grouped_round(contribution),
            )
        }
        Topic::Retirement => {
            let contribution = (f.monthly_income * 0.06).round();
            let projected = project_at_65(contribution, age);
            format!(
                "Excellent question, {name}! Your employer's 401k match is essentially free \
                 money. Based on your monthly income of ${income}, I recommend contributing at \
                 least 6% (${contribution}/month) to capture the full match and build your \
                 retirement. With your age ({age}) and time horizon, compound growth at ~7% \
                 annually could grow this to over ${projected} by age 65! Start with the match, \
                 then gradually increase by 1% each year. This is one of the best investments \
                 you can make.",
                contribution = grouped(contribution),
                projected = grouped(projected),
            )
        }
        Topic::Debt => {
            let payment = (f.monthly_surplus * 0.5).min((f.debt_amount * 0.02).max(100.0));
            let payoff = if f.debt_amount > 0.0 {
                ceil_months(f.debt_amount, payment)
            } else {
                Some(0)
            };
            let situation = if f.debt_amount > 0.0 {
                format!("${} total", grouped(f.debt_amount))
            } else {
                "minimal debt".to_string()
            };
            let plan = if f.debt_amount > 10000.0 {
                format!(
                    "I recommend the 'avalanche' method - pay minimums on all debts, then put \
                     extra money (${}/month from your ${surplus} surplus) toward the highest \
                     interest rate debt first. At this pace, you could be debt-free in about {} \
                     months.",
                    grouped_round(payment),
                    months_text(payoff),
                )
            } else {
                "You're in good shape!".to_string()
            };
            format!(
                "For your debt situation ({situation}), {name}, the key is balancing payoff with \
                 other goals. {plan} Still contribute enough to get your 401k match (that's \
                 guaranteed returns), then tackle high-interest debt (anything over 6%). Once \
                 cleared, redirect those payments to investments!"
            )
        }
        Topic::Invest => {
            let horizon = 65u32.saturating_sub(age);
            format!(
                "For someone your age ({age}), {name}, a portfolio of 80% stocks, 15% bonds, and \
                 5% cash is well-balanced. The high stock allocation takes advantage of your \
                 {horizon}-year time horizon - you can weather market volatility for higher \
                 long-term returns. With your monthly surplus of ${surplus}, you could invest \
                 around ${invest_monthly}/month after emergency fund and 401k contributions. \
                 Consider low-cost index funds in your 401k, then open a Roth IRA for additional \
                 tax-advantaged growth. Start simple and increase as you learn more!"
            )
        }
        Topic::Budget => {
            let good = f.savings_rate >= 20.0;
            let reaction = if good { "fantastic!" } else { "let's optimize this!" };
            let advice = if good {
                "You're crushing it!"
            } else {
                "Try the 50/30/20 rule: 50% needs, 30% wants, 20% savings."
            };
            format!(
                "Budgeting doesn't have to be complicated, {name}! Based on your income \
                 (${income}) and expenses (${expenses}), you have ${surplus}/month surplus - \
                 {reaction}  Your savings rate is {rate}%. {advice} Track spending for 2-3 months \
                 using an app like Mint to find hidden savings. Even cutting $50-100/month on \
                 subscriptions or dining out adds up to $600-1,200/year for your goals!"
            )
        }
        Topic::Benefits => format!(
            "Understanding your employer benefits is crucial, {name} - many people leave \
             thousands on the table! For health insurance, enroll during open enrollment and \
             choose a plan with reasonable deductibles ($1,500-$3,000). If available, consider an \
             HSA-eligible high-deductible plan - HSAs offer triple tax benefits and can become \
             another retirement account. Based on your income level (${income}/month), you'll \
             likely benefit from maximizing these tax-advantaged accounts. Check for FSA, life \
             insurance (often free basic coverage), disability insurance, and education benefits. \
             Schedule time with HR to review everything!"
        ),
        Topic::Car => {
            let car_budget = grouped_round(f.monthly_income * 0.15);
            let down_payment_months = months_text(ceil_months(5000.0, f.monthly_surplus * 0.3));
            let savings_note = if f.current_savings >= 3000.0 {
                "You could even use some of your current savings!"
            } else {
                "Build your emergency fund to 3 months first, then save for the car."
            };
            format!(
                "Great question about affording a car, {name}! Based on your finances, here's my \
                 recommendation: With your monthly income of ${income} and surplus of \
                 ${surplus}, aim to keep total car costs (payment + insurance + gas + \
                 maintenance) under ${car_budget}/month (about 15% of income). I'd suggest saving \
                 for a solid down payment first - set aside ${invest_monthly}/month and you could \
                 have $5,000 down in about {down_payment_months} months. This reduces your loan \
                 amount and monthly payments. {savings_note} Consider reliable used cars (2-3 \
                 years old) to maximize value. A $15,000-20,000 car with $5,000 down means \
                 financing ~$12,000, which at 6% for 4 years would be about $280/month. Make sure \
                 to budget for insurance ($100-150/month for someone your age), gas, and \
                 maintenance!"
            )
        }
        Topic::Housing { buying } => {
            let housing_budget = grouped_round(f.monthly_income * 0.28);
            let detail = if buying {
                format!(
                    "For buying a home, you'll need: 1) Emergency fund (6 months expenses = \
                     ${}), 2) Down payment (ideally 20% to avoid PMI - on a $200k home that's \
                     $40k), and 3) Closing costs (2-5% of home price). With your current surplus \
                     of ${surplus}/month, you could save $20k in about {} months if you're \
                     aggressive. Focus on building credit (aim for 740+ score), reducing debt, \
                     and saving consistently. First-time buyer programs exist with as little as \
                     3-5% down, but 20% gives you better rates and no PMI!",
                    grouped(f.monthly_expenses * 6.0),
                    ceil_months(20000.0, f.monthly_surplus).unwrap_or(0),
                )
            } else {
                format!(
                    "For renting, budget for rent + utilities + renters insurance (cheap but \
                     important!). With your current expenses of ${expenses}/month, make sure \
                     you're leaving room for savings and other financial goals. Building wealth \
                     through investing can sometimes be better than rushing to buy, especially \
                     early in your career when flexibility matters."
                )
            };
            format!(
                "Housing is a major financial decision, {name}! The general rule is to keep \
                 housing costs under 28% of your gross income. Based on your ${income}/month \
                 take-home, aim for rent/mortgage payments under ${housing_budget}/month. {detail}"
            )
        }
        Topic::Saving => {
            let aggressive = f.monthly_surplus * 0.6;
            let three_months = f.monthly_expenses * 3.0;
            let outlook = if f.current_savings < three_months {
                format!(
                    "Your current savings of ${} should grow to cover 3 months expenses (${}) \
                     within {} months at this rate.",
                    grouped(f.current_savings),
                    grouped(three_months),
                    months_text(ceil_months(three_months - f.current_savings, aggressive)),
                )
            } else {
                "You're in great shape with your emergency fund!".to_string()
            };
            format!(
                "Saving is one of the smartest financial habits, {name}! You're already doing well \
                 with a {rate}% savings rate. Here's my advice based on your ${surplus}/month \
                 surplus: 1) **Automate it** - Set up automatic transfers the day after payday so \
                 you \"pay yourself first\", 2) **Follow priority order**: Emergency fund (3-6 \
                 months) → 401k match → High-interest debt → Roth IRA → Additional investing, \
                 3) **Be aggressive early** - In your 20s, you can afford to save more. Try saving \
                 ${aggressive}/month (60% of surplus) - that's ${yearly}/year! {outlook} Keep \
                 this momentum going!",
                aggressive = grouped_round(aggressive),
                yearly = grouped_round(aggressive * 12.0),
            )
        }
        Topic::Taxes => format!(
            "Taxes can be confusing, {name}, but let's break it down! With your income of \
             ${income}/month (${annual}/year), you're likely in the 12-22% federal tax bracket. \
             Key tax-advantaged moves: 1) **401k contributions** - These reduce your taxable \
             income dollar-for-dollar (contribute ${ten_percent}/month and save ~${saved}/month \
             in taxes!), 2) **HSA** - Triple tax advantage (deductible, grows tax-free, withdraws \
             tax-free for medical), 3) **Roth IRA** - Pay taxes now at your lower current rate, \
             grow tax-free forever. Check your W-4 withholdings - if you get huge refunds, you're \
             giving the government an interest-free loan. Adjust to get closer to $0 refund and \
             invest that extra monthly cash flow instead! Consider talking to a CPA for \
             personalized advice, especially if you have side income, investments, or complex \
             situations.",
            annual = grouped(f.monthly_income * 12.0),
            ten_percent = grouped_round(f.monthly_income * 0.1),
            saved = grouped_round(f.monthly_income * 0.1 * 0.22),
        ),
        Topic::AccountOpening => format!(
            "Great question about opening a brokerage account, {name}! I'm excited to tell you \
             that we have a new feature on this platform that makes it super easy!\n\n\
             **Our 4-Step Account Opening Process:**\n\n\
             **Step 1:** Choose your broker - We have several recommended options including \
             Principal Securities, Vanguard, and Fidelity. All offer $0 commissions and excellent \
             service.\n\n\
             **Step 2:** Select your account type:\n\
             - **Individual Brokerage** - Standard account, no contribution limits\n\
             - **Traditional IRA** - Tax deduction now, pay taxes at withdrawal (great if you \
             want to reduce current taxable income)\n\
             - **Roth IRA** - After-tax contributions, tax-free withdrawals in retirement \
             (perfect for someone your age at {age}!)\n\
             - **Joint Account** - Shared with a partner\n\n\
             **Step 3:** Fill in your personal information and address (pre-filled from your \
             profile for convenience)\n\n\
             **Step 4:** Choose how to fund your account (Bank Transfer, Wire, or Check)\n\n\
             Based on your ${surplus}/month surplus, you could start with ${invest_monthly}/month \
             in automatic investments!\n\n\
             To open an account, go to the **Investment Coach section** on your Results page, \
             click the **Action Plan** tab, and hit the **\"Open Brokerage Account\"** button. It \
             takes just a few minutes!"
        ),
        Topic::InvestmentCoach => format!(
            "Perfect timing, {name}! We just launched an **AI Investment Coach** feature that's \
             perfect for you!\n\n\
             **Here's what it does:**\n\
             - Analyzes your age ({age}), risk tolerance, and financial goals\n\
             - Recommends specific ETFs (like VOO, VTI, VEA, BND) with clear explanations\n\
             - Shows you EXACTLY how much to invest in each fund monthly\n\
             - Provides a smart portfolio allocation (stocks vs bonds) based on your situation\n\
             - Includes rebalancing strategies and tax-efficient tips\n\
             - All recommendations come with detailed reasoning so you understand WHY\n\n\
             **For someone with your profile:**\n\
             - Monthly capacity: ${invest_monthly}\n\
             - You'd likely get a portfolio of ~80% stocks, 15% bonds, 5% cash\n\
             - Specific ETFs recommended based on low costs and diversification\n\n\
             **How to use it:**\n\
             Go to your Results page, find the **AI Investment Coach** section (you can't miss \
             it!), and click **\"Generate Investment Plan\"**. It analyzes everything and gives \
             you personalized recommendations in seconds!\n\n\
             This takes the guesswork out of investing - you'll know exactly what to buy and why. \
             Want me to explain more about ETFs or investment strategies first?"
        ),
        Topic::Broker => format!(
            "Excellent question about choosing a broker, {name}! Here are some great options:\n\n\
             **Recommended Brokers:**\n\
             - **Principal Securities** - Comprehensive retirement planning, top-rated customer \
             service, integrated financial tools\n\
             - **Vanguard** - Famous for low-cost index funds and ETFs, excellent for long-term \
             investors\n\
             - **Fidelity** - Amazing research tools, no account minimums, great mobile app\n\
             - **Schwab** - Excellent customer service, banking integration\n\n\
             All of these offer $0 commissions on trades and are perfect for someone starting \
             their financial journey. The choice often comes down to personal preference and \
             which features matter most to you.\n\n\
             The good news? You can **open an account directly through our platform!** Just head \
             to the Investment Coach section, go to the Action Plan tab, and click \"Open \
             Brokerage Account.\" We'll guide you through the whole process - it takes about 5 \
             minutes!\n\n\
             Based on your monthly surplus of ${surplus}, you could start investing around \
             ${invest_monthly}/month. Want help figuring out what to invest in once your account \
             is open?"
        ),
        Topic::Ira => format!(
            "Great question about IRAs, {name}! Let me break down the differences:\n\n\
             **Roth IRA (Recommended for you at age {age}):**\n\
             - Contribute AFTER-tax money (no tax deduction now)\n\
             - Grows completely TAX-FREE forever\n\
             - Withdraw TAX-FREE in retirement\n\
             - Best for younger people who expect higher income later\n\
             - 2024 limit: $7,000/year ($583/month)\n\n\
             **Traditional IRA:**\n\
             - Contribute PRE-tax money (tax deduction now!)\n\
             - Reduces your current taxable income\n\
             - Pay taxes when you withdraw in retirement\n\
             - Best if you need the tax break now\n\n\
             **Individual Brokerage:**\n\
             - No contribution limits\n\
             - No tax advantages, but complete flexibility\n\
             - Can withdraw anytime (but pay capital gains tax)\n\
             - Good for goals before retirement age\n\n\
             **My recommendation for you:** Start with a **Roth IRA** given your age. Your tax \
             rate is likely lower now than it will be in 30-40 years. Max it out if possible \
             (${roth_monthly}/month), then use a brokerage account for additional investing.\n\n\
             The cool part? You can **open any of these account types directly on our \
             platform!** Use the \"Open Brokerage Account\" feature in the Investment Coach \
             section. Takes just a few minutes!\n\n\
             With your ${surplus}/month surplus, you could easily max out a Roth IRA and still \
             have money left for other goals!",
            roth_monthly = grouped_round(7000.0 / 12.0),
        ),
        Topic::Features => format!(
            "So glad you asked, {name}! We've just launched some amazing new features:\n\n\
             **1. AI Investment Coach** 🤖\n\
             - Get personalized stock and ETF recommendations\n\
             - See exactly how much to invest in each fund monthly\n\
             - Smart portfolio allocation based on your age and risk tolerance\n\
             - Clear explanations for every recommendation\n\
             - Access it from your Results page!\n\n\
             **2. Brokerage Account Opening** 🏦\n\
             - Open an account with recommended brokers like Principal Securities, Vanguard, or \
             Fidelity\n\
             - Choose account type: Roth IRA, Traditional IRA, Individual, or Joint\n\
             - Complete the process in just 4 easy steps\n\
             - Get your account number immediately\n\n\
             **How to use them:**\n\
             - Find the **Investment Coach** section on your Results page\n\
             - Click **\"Generate Investment Plan\"** for personalized recommendations\n\
             - Then click **\"Open Brokerage Account\"** in the Action Plan tab to get started!\n\n\
             **Based on your finances:**\n\
             With your ${surplus}/month surplus and {rate}% savings rate, you're in a great \
             position to start investing. The Investment Coach will show you exactly how to put \
             that money to work!\n\n\
             Want to try it out? Or have questions about how it works?"
        ),
        Topic::MoneyGeneral => {
            let position = if f.savings_rate >= 20.0 {
                "in a strong position"
            } else {
                "building a solid foundation"
            };
            let fund = if coverage >= 6.0 { "robust" } else { "3-6 month" };
            let debt_step = if f.debt_amount > 0.0 {
                "Pay down high-interest debt, and 4)"
            } else {
                "3)"
            };
            format!(
                "That's a great question, {name}! Based on your financial profile (income: \
                 ${income}/month, expenses: ${expenses}/month, surplus: ${surplus}/month), you're \
                 {position}. With your {rate}% savings rate, you're on track to meet your goals. \
                 Remember the key priorities: 1) Get the full employer 401k match, 2) Build a \
                 {fund} emergency fund, 3) {debt_step} Continue investing for the long term. Feel \
                 free to ask about any specific aspect of your plan!"
            )
        }
        Topic::OffTopic => format!(
            "I appreciate the question, {name}, but I'm specifically designed to help with your \
             personal finances and financial planning! I'm here to discuss topics like \
             budgeting, investing, retirement planning, debt management, emergency funds, taxes, \
             insurance, and making smart money decisions based on your specific situation \
             (income: ${income}/month, expenses: ${expenses}/month, savings rate: {rate}%). Feel \
             free to ask me anything about your financial goals, or questions like: \"How should \
             I prioritize my financial goals?\", \"What's the best way to invest?\", \"How much \
             should I save?\", or \"Should I pay off debt or invest?\" What financial topic can I \
             help you with today?"
        ),
    }
}
