pub mod configuration;

pub mod cosmology {
    pub mod parameters;
    pub mod provider;
}

pub mod evolution {
    pub mod evolutionlaw;
    pub mod noevolution;
    pub mod hopkinsbeacom2006;
    pub mod yukseletal2008;
    pub mod candelsclash2015;
}

pub mod math {
    pub mod quadrature;
}

pub mod population {
    pub mod weighting;
    pub mod samplingtable;
    pub mod populationerror;
    pub mod sourcepopulation;
    pub mod transientsourcepopulation;
}

pub mod units;
