use serde::Serialize;

use crate::models::profile::{Concern, QuizAnswers};

/// Which optional parts of the details form apply, driven by the quiz concerns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormSections {
    pub benefits: bool,
    pub debt: bool,
    pub emergency_fund: bool,
    pub investing: bool,
    pub budgeting: bool,
    pub big_purchase: bool,
    pub taxes: bool,
    pub paycheck: bool,
}

impl FormSections {
    pub fn for_quiz(quiz: &QuizAnswers) -> Self {
        FormSections {
            benefits: quiz.has_concern(Concern::UnderstandingBenefits),
            debt: quiz.has_concern(Concern::PayingOffDebt),
            emergency_fund: quiz.has_concern(Concern::EmergencyFund),
            investing: quiz.has_concern(Concern::InvestingFuture),
            budgeting: quiz.has_concern(Concern::BudgetingTracking),
            big_purchase: quiz.has_concern(Concern::SavingBigPurchase),
            taxes: quiz.has_concern(Concern::TaxesWithholdings),
            paycheck: quiz.has_concern(Concern::ManagingPaycheck),
        }
    }

    /// The goal questions show for either a big purchase or investing.
    pub fn goal(&self) -> bool {
        self.big_purchase || self.investing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_concerns() {
        let quiz = QuizAnswers {
            top_financial_concerns: vec![Concern::PayingOffDebt, Concern::InvestingFuture],
            ..Default::default()
        };
        let sections = FormSections::for_quiz(&quiz);
        assert!(sections.debt);
        assert!(sections.investing);
        assert!(sections.goal());
        assert!(!sections.benefits);
        assert!(!sections.taxes);
    }

    #[test]
    fn test_no_concerns_no_sections() {
        let sections = FormSections::for_quiz(&QuizAnswers::default());
        assert_eq!(sections, FormSections::default());
        assert!(!sections.goal());
    }
}
